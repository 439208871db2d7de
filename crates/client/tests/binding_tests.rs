//! HTTP binding tests for the operation catalog.
//!
//! This module tests:
//! - Path parameter substitution and percent-encoding
//! - Query parameter extraction, including list members
//! - Failure on missing path parameters
//! - URL construction against configured endpoints
//!
//! # What this does NOT handle
//! - Sending requests (no transport exists in this crate)

mod common;

use common::*;
use quicksight_client::models::{
    CreateGroupMembershipRequest, CreateIngestionRequest, DeleteIamPolicyAssignmentRequest,
    DescribeTemplateRequest, ListTagsForResourceRequest, UntagResourceRequest,
    UpdateDashboardPublishedVersionRequest,
};
use quicksight_client::{HttpMethod, ModelError, Operation, OperationKind};
use url::Url;

fn endpoint() -> Url {
    Url::parse("https://quicksight.eu-west-1.amazonaws.com").unwrap()
}

#[test]
fn test_path_members_leave_the_body() {
    let request = CreateGroupMembershipRequest::default()
        .with_aws_account_id(ACCOUNT_ID)
        .with_namespace("default")
        .with_group_name("analysts")
        .with_member_name("alice@example.com");
    let binding = request.binding().unwrap();
    assert_eq!(binding.method, HttpMethod::Put);
    assert_eq!(
        binding.path,
        "/accounts/111122223333/namespaces/default/groups/analysts/members/alice%40example.com"
    );
    assert!(binding.query.is_empty());
    assert_eq!(binding.body, None);
}

#[test]
fn test_arn_path_member_is_a_single_segment() {
    let request = ListTagsForResourceRequest::default()
        .with_resource_arn("arn:aws:quicksight:us-east-1:111122223333:dashboard/sales");
    let url = request.binding().unwrap().url(&endpoint()).unwrap();
    assert_eq!(
        url.path(),
        "/resources/arn%3Aaws%3Aquicksight%3Aus-east-1%3A111122223333%3Adashboard%2Fsales/tags"
    );
    assert_eq!(url.path_segments().map(Iterator::count), Some(3));
}

#[test]
fn test_missing_path_member_names_operation_and_parameter() {
    let request = CreateIngestionRequest::default()
        .with_aws_account_id(ACCOUNT_ID)
        .with_data_set_id("orders");
    match request.binding().unwrap_err() {
        ModelError::MissingPathParameter {
            operation,
            parameter,
        } => {
            assert_eq!(operation, "CreateIngestion");
            assert_eq!(parameter, "IngestionId");
        }
        other => panic!("expected MissingPathParameter, got {other:?}"),
    }
}

#[test]
fn test_numeric_path_member() {
    let request = UpdateDashboardPublishedVersionRequest::default()
        .with_aws_account_id(ACCOUNT_ID)
        .with_dashboard_id("sales")
        .with_version_number(7);
    let binding = request.binding().unwrap();
    assert_eq!(binding.path, "/accounts/111122223333/dashboards/sales/versions/7");
    assert_eq!(binding.body, None);
}

#[test]
fn test_query_members_and_url() {
    let request = DescribeTemplateRequest::default()
        .with_aws_account_id(ACCOUNT_ID)
        .with_template_id("sales-template")
        .with_alias_name("$PUBLISHED");
    let url = request.binding().unwrap().url(&endpoint()).unwrap();
    assert_eq!(
        url.as_str(),
        "https://quicksight.eu-west-1.amazonaws.com/accounts/111122223333/templates/sales-template?alias-name=%24PUBLISHED"
    );
}

#[test]
fn test_configured_endpoint_path_prefix_is_kept() {
    let config = quicksight_config::ConfigLoader::new()
        .with_endpoint("https://proxy.example.com/quicksight/")
        .build()
        .unwrap();
    let request = DescribeTemplateRequest::default()
        .with_aws_account_id(ACCOUNT_ID)
        .with_template_id("sales-template")
        .with_version_number(3);
    let url = request.binding().unwrap().url(&config.endpoint).unwrap();
    assert_eq!(
        url.as_str(),
        "https://proxy.example.com/quicksight/accounts/111122223333/templates/sales-template?version-number=3"
    );
}

#[test]
fn test_list_query_member() {
    let request = UntagResourceRequest::default()
        .with_resource_arn("arn:x")
        .with_tag_keys(["team", "env"]);
    let url = request.binding().unwrap().url(&endpoint()).unwrap();
    assert_eq!(url.query(), Some("keys=team&keys=env"));
}

#[test]
fn test_delete_assignment_uses_singular_namespace_path() {
    let request = DeleteIamPolicyAssignmentRequest::default()
        .with_aws_account_id(ACCOUNT_ID)
        .with_namespace("default")
        .with_assignment_name("analysts-read");
    assert_eq!(
        request.binding().unwrap().path,
        "/accounts/111122223333/namespace/default/iam-policy-assignments/analysts-read"
    );
}

#[test]
fn test_every_operation_declares_placeholders_it_can_fill() {
    for kind in OperationKind::ALL {
        let template = kind.uri_template();
        assert_eq!(
            template.matches('{').count(),
            template.matches('}').count(),
            "unbalanced template for {kind}"
        );
        for (query, member) in kind.query() {
            assert!(!query.is_empty() && !member.is_empty(), "{kind}");
            assert!(
                !template.contains(&format!("{{{member}}}")),
                "{kind} binds {member} to both path and query"
            );
        }
    }
}

#[test]
fn test_binding_from_fixture_keeps_body() {
    let binding = OperationKind::CreateDataSource
        .binding_json(load_fixture("data_sources/create_redshift_request.json"))
        .unwrap();
    assert_eq!(binding.method, HttpMethod::Post);
    assert_eq!(binding.path, "/accounts/111122223333/data-sources");
    let body = binding.body.unwrap();
    assert!(body.get("AwsAccountId").is_none());
    assert_eq!(body["DataSourceId"], "warehouse");
    assert_eq!(body["Credentials"]["CredentialPair"]["Password"], "correct-horse-battery-staple");
}
