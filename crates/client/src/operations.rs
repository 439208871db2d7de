//! The operation catalog.
//!
//! Responsibilities:
//! - Pair each request type with its result type and HTTP binding metadata
//!   (`Operation`).
//! - Enumerate every operation (`OperationKind`) for lookup by name and for
//!   working with requests whose type is only known at runtime.
//!
//! Does NOT handle:
//! - Request signing or transport.
//!
//! Invariants:
//! - Operation names are the service's own names (`CreateIAMPolicyAssignment`),
//!   and lookup by name is exact.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::binding::{HttpBinding, HttpMethod};
use crate::error::{ModelError, Result};
use crate::models::*;
use crate::validation::{Validate, ValidationPolicy, ValidationReport};

/// A request type together with the metadata needed to send it.
pub trait Operation: Serialize + DeserializeOwned + Validate + fmt::Display {
    /// Service operation name.
    const NAME: &'static str;
    const METHOD: HttpMethod;
    /// Path template with `{Member}` placeholders.
    const URI_TEMPLATE: &'static str;
    /// `(query name, member wire name)` pairs.
    const QUERY: &'static [(&'static str, &'static str)];
    const KIND: OperationKind;

    /// Result type returned by the service.
    type Output: Serialize + DeserializeOwned + Validate + fmt::Display;

    /// Resolve this request's method, path, query, and body.
    fn binding(&self) -> Result<HttpBinding> {
        HttpBinding::resolve(Self::NAME, Self::METHOD, Self::URI_TEMPLATE, Self::QUERY, self)
    }
}

/// A request of any operation, for callers that pick the operation at runtime.
pub trait DynRequest: fmt::Debug {
    fn operation(&self) -> OperationKind;
    fn check(&self, policy: &ValidationPolicy) -> ValidationReport;
    fn http_binding(&self) -> Result<HttpBinding>;
    fn rendered(&self) -> String;
    fn to_json(&self) -> Result<Value>;
}

impl<T: Operation + fmt::Debug> DynRequest for T {
    fn operation(&self) -> OperationKind {
        T::KIND
    }

    fn check(&self, policy: &ValidationPolicy) -> ValidationReport {
        self.validate(policy)
    }

    fn http_binding(&self) -> Result<HttpBinding> {
        self.binding()
    }

    fn rendered(&self) -> String {
        self.to_string()
    }

    fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn parse<T: Operation + fmt::Debug + 'static>(value: Value) -> Result<Box<dyn DynRequest>> {
    let request: T = serde_json::from_value(value)?;
    Ok(Box::new(request))
}

/// Declare the catalog.
///
/// Each row is `Variant => "ServiceName", METHOD "template" [query bindings]`;
/// the request and result types are `<Variant>Request` and `<Variant>Result`.
macro_rules! operations {
    (
        $(
            $variant:ident => $name:literal, $method:ident $uri:literal
            $([ $($query:literal = $member:literal),* $(,)? ])?
        ;)+
    ) => {
        /// Every operation of the service.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum OperationKind {
            $($variant,)+
        }

        impl OperationKind {
            /// All operations.
            pub const ALL: &'static [OperationKind] = &[$(Self::$variant,)+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            pub fn method(self) -> HttpMethod {
                match self {
                    $(Self::$variant => HttpMethod::$method,)+
                }
            }

            pub fn uri_template(self) -> &'static str {
                match self {
                    $(Self::$variant => $uri,)+
                }
            }

            pub fn query(self) -> &'static [(&'static str, &'static str)] {
                match self {
                    $(Self::$variant => &[$($(($query, $member)),*)?],)+
                }
            }

            /// Parse a JSON request document for this operation.
            pub fn request_from_json(self, value: Value) -> Result<Box<dyn DynRequest>> {
                paste::paste! {
                    match self {
                        $(Self::$variant => parse::<[<$variant Request>]>(value),)+
                    }
                }
            }
        }

        paste::paste! {
            $(
                impl Operation for [<$variant Request>] {
                    const NAME: &'static str = $name;
                    const METHOD: HttpMethod = HttpMethod::$method;
                    const URI_TEMPLATE: &'static str = $uri;
                    const QUERY: &'static [(&'static str, &'static str)] =
                        &[$($(($query, $member)),*)?];
                    const KIND: OperationKind = OperationKind::$variant;

                    type Output = [<$variant Result>];
                }
            )+
        }
    };
}

operations! {
    CancelIngestion => "CancelIngestion", Delete
        "/accounts/{AwsAccountId}/data-sets/{DataSetId}/ingestions/{IngestionId}";
    CreateDashboard => "CreateDashboard", Post
        "/accounts/{AwsAccountId}/dashboards/{DashboardId}";
    CreateDataSet => "CreateDataSet", Post
        "/accounts/{AwsAccountId}/data-sets";
    CreateDataSource => "CreateDataSource", Post
        "/accounts/{AwsAccountId}/data-sources";
    CreateGroup => "CreateGroup", Post
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/groups";
    CreateGroupMembership => "CreateGroupMembership", Put
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/groups/{GroupName}/members/{MemberName}";
    CreateIamPolicyAssignment => "CreateIAMPolicyAssignment", Post
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/iam-policy-assignments/";
    CreateIngestion => "CreateIngestion", Put
        "/accounts/{AwsAccountId}/data-sets/{DataSetId}/ingestions/{IngestionId}";
    CreateTemplate => "CreateTemplate", Post
        "/accounts/{AwsAccountId}/templates/{TemplateId}";
    CreateTemplateAlias => "CreateTemplateAlias", Post
        "/accounts/{AwsAccountId}/templates/{TemplateId}/aliases/{AliasName}";
    DeleteDashboard => "DeleteDashboard", Delete
        "/accounts/{AwsAccountId}/dashboards/{DashboardId}"
        ["version-number" = "VersionNumber"];
    DeleteDataSet => "DeleteDataSet", Delete
        "/accounts/{AwsAccountId}/data-sets/{DataSetId}";
    DeleteDataSource => "DeleteDataSource", Delete
        "/accounts/{AwsAccountId}/data-sources/{DataSourceId}";
    DeleteGroup => "DeleteGroup", Delete
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/groups/{GroupName}";
    DeleteGroupMembership => "DeleteGroupMembership", Delete
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/groups/{GroupName}/members/{MemberName}";
    DeleteIamPolicyAssignment => "DeleteIAMPolicyAssignment", Delete
        "/accounts/{AwsAccountId}/namespace/{Namespace}/iam-policy-assignments/{AssignmentName}";
    DeleteTemplate => "DeleteTemplate", Delete
        "/accounts/{AwsAccountId}/templates/{TemplateId}"
        ["version-number" = "VersionNumber"];
    DeleteTemplateAlias => "DeleteTemplateAlias", Delete
        "/accounts/{AwsAccountId}/templates/{TemplateId}/aliases/{AliasName}";
    DeleteUser => "DeleteUser", Delete
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/users/{UserName}";
    DeleteUserByPrincipalId => "DeleteUserByPrincipalId", Delete
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/user-principals/{PrincipalId}";
    DescribeDashboard => "DescribeDashboard", Get
        "/accounts/{AwsAccountId}/dashboards/{DashboardId}"
        ["version-number" = "VersionNumber", "alias-name" = "AliasName"];
    DescribeDashboardPermissions => "DescribeDashboardPermissions", Get
        "/accounts/{AwsAccountId}/dashboards/{DashboardId}/permissions";
    DescribeDataSet => "DescribeDataSet", Get
        "/accounts/{AwsAccountId}/data-sets/{DataSetId}";
    DescribeDataSetPermissions => "DescribeDataSetPermissions", Get
        "/accounts/{AwsAccountId}/data-sets/{DataSetId}/permissions";
    DescribeDataSource => "DescribeDataSource", Get
        "/accounts/{AwsAccountId}/data-sources/{DataSourceId}";
    DescribeDataSourcePermissions => "DescribeDataSourcePermissions", Get
        "/accounts/{AwsAccountId}/data-sources/{DataSourceId}/permissions";
    DescribeGroup => "DescribeGroup", Get
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/groups/{GroupName}";
    DescribeIamPolicyAssignment => "DescribeIAMPolicyAssignment", Get
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/iam-policy-assignments/{AssignmentName}";
    DescribeIngestion => "DescribeIngestion", Get
        "/accounts/{AwsAccountId}/data-sets/{DataSetId}/ingestions/{IngestionId}";
    DescribeTemplate => "DescribeTemplate", Get
        "/accounts/{AwsAccountId}/templates/{TemplateId}"
        ["version-number" = "VersionNumber", "alias-name" = "AliasName"];
    DescribeTemplateAlias => "DescribeTemplateAlias", Get
        "/accounts/{AwsAccountId}/templates/{TemplateId}/aliases/{AliasName}";
    DescribeTemplatePermissions => "DescribeTemplatePermissions", Get
        "/accounts/{AwsAccountId}/templates/{TemplateId}/permissions";
    DescribeUser => "DescribeUser", Get
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/users/{UserName}";
    GetDashboardEmbedUrl => "GetDashboardEmbedUrl", Get
        "/accounts/{AwsAccountId}/dashboards/{DashboardId}/embed-url"
        [
            "creds-type" = "IdentityType",
            "session-lifetime" = "SessionLifetimeInMinutes",
            "undo-redo-disabled" = "UndoRedoDisabled",
            "reset-disabled" = "ResetDisabled",
            "user-arn" = "UserArn",
        ];
    ListDashboardVersions => "ListDashboardVersions", Get
        "/accounts/{AwsAccountId}/dashboards/{DashboardId}/versions"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListDashboards => "ListDashboards", Get
        "/accounts/{AwsAccountId}/dashboards"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListDataSets => "ListDataSets", Get
        "/accounts/{AwsAccountId}/data-sets"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListDataSources => "ListDataSources", Get
        "/accounts/{AwsAccountId}/data-sources"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListGroupMemberships => "ListGroupMemberships", Get
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/groups/{GroupName}/members"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListGroups => "ListGroups", Get
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/groups"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListIamPolicyAssignments => "ListIAMPolicyAssignments", Get
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/iam-policy-assignments"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListIamPolicyAssignmentsForUser => "ListIAMPolicyAssignmentsForUser", Get
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/users/{UserName}/iam-policy-assignments"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListIngestions => "ListIngestions", Get
        "/accounts/{AwsAccountId}/data-sets/{DataSetId}/ingestions"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListTagsForResource => "ListTagsForResource", Get
        "/resources/{ResourceArn}/tags";
    ListTemplateAliases => "ListTemplateAliases", Get
        "/accounts/{AwsAccountId}/templates/{TemplateId}/aliases"
        ["next-token" = "NextToken", "max-result" = "MaxResults"];
    ListTemplateVersions => "ListTemplateVersions", Get
        "/accounts/{AwsAccountId}/templates/{TemplateId}/versions"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListTemplates => "ListTemplates", Get
        "/accounts/{AwsAccountId}/templates"
        ["next-token" = "NextToken", "max-result" = "MaxResults"];
    ListUserGroups => "ListUserGroups", Get
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/users/{UserName}/groups"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    ListUsers => "ListUsers", Get
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/users"
        ["next-token" = "NextToken", "max-results" = "MaxResults"];
    RegisterUser => "RegisterUser", Post
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/users";
    SearchDashboards => "SearchDashboards", Post
        "/accounts/{AwsAccountId}/search/dashboards";
    TagResource => "TagResource", Post
        "/resources/{ResourceArn}/tags";
    UntagResource => "UntagResource", Delete
        "/resources/{ResourceArn}/tags"
        ["keys" = "TagKeys"];
    UpdateDashboard => "UpdateDashboard", Put
        "/accounts/{AwsAccountId}/dashboards/{DashboardId}";
    UpdateDashboardPermissions => "UpdateDashboardPermissions", Put
        "/accounts/{AwsAccountId}/dashboards/{DashboardId}/permissions";
    UpdateDashboardPublishedVersion => "UpdateDashboardPublishedVersion", Put
        "/accounts/{AwsAccountId}/dashboards/{DashboardId}/versions/{VersionNumber}";
    UpdateDataSet => "UpdateDataSet", Put
        "/accounts/{AwsAccountId}/data-sets/{DataSetId}";
    UpdateDataSetPermissions => "UpdateDataSetPermissions", Post
        "/accounts/{AwsAccountId}/data-sets/{DataSetId}/permissions";
    UpdateDataSource => "UpdateDataSource", Put
        "/accounts/{AwsAccountId}/data-sources/{DataSourceId}";
    UpdateDataSourcePermissions => "UpdateDataSourcePermissions", Post
        "/accounts/{AwsAccountId}/data-sources/{DataSourceId}/permissions";
    UpdateGroup => "UpdateGroup", Put
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/groups/{GroupName}";
    UpdateIamPolicyAssignment => "UpdateIAMPolicyAssignment", Put
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/iam-policy-assignments/{AssignmentName}";
    UpdateTemplate => "UpdateTemplate", Put
        "/accounts/{AwsAccountId}/templates/{TemplateId}";
    UpdateTemplateAlias => "UpdateTemplateAlias", Put
        "/accounts/{AwsAccountId}/templates/{TemplateId}/aliases/{AliasName}";
    UpdateTemplatePermissions => "UpdateTemplatePermissions", Put
        "/accounts/{AwsAccountId}/templates/{TemplateId}/permissions";
    UpdateUser => "UpdateUser", Put
        "/accounts/{AwsAccountId}/namespaces/{Namespace}/users/{UserName}";
}

impl OperationKind {
    /// Look up an operation by its exact service name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ModelError::UnknownOperation(name.to_string()))
    }

    /// Parse and validate a JSON request document.
    pub fn validate_json(self, value: Value, policy: &ValidationPolicy) -> Result<ValidationReport> {
        Ok(self.request_from_json(value)?.check(policy))
    }

    /// Parse a JSON request document and render it as `{Field: value, ...}`.
    pub fn render_json(self, value: Value) -> Result<String> {
        Ok(self.request_from_json(value)?.rendered())
    }

    /// Parse a JSON request document and resolve its HTTP binding.
    pub fn binding_json(self, value: Value) -> Result<HttpBinding> {
        self.request_from_json(value)?.http_binding()
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
