//! Proptest strategies for model values.
//!
//! Strategies only produce values that satisfy the declared field
//! constraints, so they double as valid-input generators for validation
//! tests.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

use crate::models::{
    AthenaParameters, CreateDataSourceRequest, CredentialPair, DataSourceCredentials,
    DataSourceParameters, DataSourceType, ManifestFileLocation, MySqlParameters,
    RedshiftParameters, ResourcePermission, S3Parameters, Tag,
};

/// 12-digit account ids.
pub fn account_id() -> impl Strategy<Value = String> {
    "[0-9]{12}"
}

/// Resource ids as accepted by the service, e.g. `sales-2024_q1`.
pub fn resource_id() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9_-]{0,40}"
}

pub fn tag() -> impl Strategy<Value = Tag> {
    ("[a-z][a-z0-9:_-]{0,30}", "[ -~]{1,60}").prop_map(|(key, value)| Tag::new(key, value))
}

pub fn resource_permission() -> impl Strategy<Value = ResourcePermission> {
    (
        "arn:aws:quicksight:us-east-1:[0-9]{12}:user/default/[a-z]{1,12}",
        vec("quicksight:[A-Z][A-Za-z]{3,30}", 1..=16),
    )
        .prop_map(|(principal, actions)| ResourcePermission::new(principal, actions))
}

fn host_port_database() -> impl Strategy<Value = (String, i32, String)> {
    ("[a-z][a-z0-9.-]{0,60}", 1..=65535i32, "[a-z][a-z0-9_]{0,30}")
}

/// Any engine's connection parameters.
pub fn data_source_parameters() -> impl Strategy<Value = DataSourceParameters> {
    prop_oneof![
        option::of("[a-zA-Z0-9_-]{1,128}").prop_map(|work_group| {
            let mut params = AthenaParameters::default();
            params.set_work_group(work_group);
            DataSourceParameters::from(params)
        }),
        host_port_database().prop_map(|(host, port, database)| {
            DataSourceParameters::from(
                MySqlParameters::default()
                    .with_host(host)
                    .with_port(port)
                    .with_database(database),
            )
        }),
        (host_port_database(), option::of("[a-z][a-z0-9-]{0,40}")).prop_map(
            |((host, port, database), cluster_id)| {
                let mut params = RedshiftParameters::default()
                    .with_host(host)
                    .with_port(port)
                    .with_database(database);
                params.set_cluster_id(cluster_id);
                DataSourceParameters::from(params)
            }
        ),
        ("[a-z][a-z0-9.-]{2,62}", "[a-zA-Z0-9/_.-]{1,200}").prop_map(|(bucket, key)| {
            DataSourceParameters::from(S3Parameters::default().with_manifest_file_location(
                ManifestFileLocation::default().with_bucket(bucket).with_key(key),
            ))
        }),
    ]
}

pub fn credentials() -> impl Strategy<Value = DataSourceCredentials> {
    prop_oneof![
        ("[a-z][a-z0-9_]{0,30}", "[!-~]{8,40}")
            .prop_map(|(user, password)| DataSourceCredentials::from(CredentialPair::new(user, password))),
        "arn:aws:quicksight:us-east-1:[0-9]{12}:datasource/[a-z0-9-]{1,20}"
            .prop_map(DataSourceCredentials::CopySourceArn),
    ]
}

/// A complete, valid `CreateDataSource` request.
pub fn create_data_source_request() -> impl Strategy<Value = CreateDataSourceRequest> {
    (
        account_id(),
        resource_id(),
        "[A-Za-z][A-Za-z0-9 ]{0,60}",
        data_source_parameters(),
        option::of(credentials()),
        option::of(vec(resource_permission(), 1..4)),
        option::of(vec(tag(), 1..6)),
    )
        .prop_map(
            |(account, id, name, parameters, credentials, permissions, tags)| {
                let mut request = CreateDataSourceRequest::default()
                    .with_aws_account_id(account)
                    .with_data_source_id(id)
                    .with_name(name)
                    .with_engine(parameters);
                if request.data_source_type().is_none() {
                    request = request.with_data_source_type(DataSourceType::MySql);
                }
                request.set_credentials(credentials);
                request.set_permissions(permissions);
                request.set_tags(tags);
                request
            },
        )
}
