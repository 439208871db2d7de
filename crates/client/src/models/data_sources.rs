//! Data source models.
//!
//! Responsibilities:
//! - Define the connection parameter structures of every supported engine and
//!   the `DataSourceParameters` union that selects one of them.
//! - Define the data source request/result pairs.
//!
//! Non-responsibilities:
//! - Does not test connectivity or resolve credentials.

use crate::models::common::{ResourcePermission, Tag};
use crate::models::enums::{DataSourceErrorInfoType, DataSourceType, ResourceStatus};
use crate::types::{SensitiveString, Timestamp};
use crate::{shape, union_shape};

shape! {
    /// Amazon Elasticsearch Service domain.
    pub struct AmazonElasticsearchParameters {
        domain: one String => "Domain" [required, len(1, 64)],
    }
}

shape! {
    /// Amazon Athena workgroup.
    pub struct AthenaParameters {
        work_group: one String => "WorkGroup" [len(1, 128)],
    }
}

shape! {
    /// Amazon Aurora MySQL endpoint.
    pub struct AuroraParameters {
        host: one String => "Host" [required, len(1, 256)],
        port: val i32 => "Port" [required, range(1, 65535)],
        database: one String => "Database" [required, len(1, 128)],
    }
}

shape! {
    /// Amazon Aurora PostgreSQL endpoint.
    pub struct AuroraPostgreSqlParameters {
        host: one String => "Host" [required, len(1, 256)],
        port: val i32 => "Port" [required, range(1, 65535)],
        database: one String => "Database" [required, len(1, 128)],
    }
}

shape! {
    /// AWS IoT Analytics data set.
    pub struct AwsIotAnalyticsParameters {
        data_set_name: one String => "DataSetName" [required, len(1, 128)],
    }
}

shape! {
    /// Jira site.
    pub struct JiraParameters {
        site_base_url: one String => "SiteBaseUrl" [required, len(1, 1024)],
    }
}

shape! {
    /// MariaDB endpoint.
    pub struct MariaDbParameters {
        host: one String => "Host" [required, len(1, 256)],
        port: val i32 => "Port" [required, range(1, 65535)],
        database: one String => "Database" [required, len(1, 128)],
    }
}

shape! {
    /// MySQL endpoint.
    pub struct MySqlParameters {
        host: one String => "Host" [required, len(1, 256)],
        port: val i32 => "Port" [required, range(1, 65535)],
        database: one String => "Database" [required, len(1, 128)],
    }
}

shape! {
    /// PostgreSQL endpoint.
    pub struct PostgreSqlParameters {
        host: one String => "Host" [required, len(1, 256)],
        port: val i32 => "Port" [required, range(1, 65535)],
        database: one String => "Database" [required, len(1, 128)],
    }
}

shape! {
    /// Presto endpoint.
    pub struct PrestoParameters {
        host: one String => "Host" [required, len(1, 256)],
        port: val i32 => "Port" [required, range(1, 65535)],
        catalog: one String => "Catalog" [required, len(0, 128)],
    }
}

shape! {
    /// Amazon RDS instance.
    pub struct RdsParameters {
        instance_id: one String => "InstanceId" [required, len(1, 64)],
        database: one String => "Database" [required, len(1, 128)],
    }
}

shape! {
    /// Amazon Redshift cluster. Either `Host` and `Port`, or `ClusterId`, locates it.
    pub struct RedshiftParameters {
        host: one String => "Host" [len(1, 256)],
        port: val i32 => "Port" [range(0, 65535)],
        database: one String => "Database" [required, len(1, 128)],
        cluster_id: one String => "ClusterId" [len(1, 64)],
    }
}

shape! {
    /// Location of an S3 manifest file.
    pub struct ManifestFileLocation {
        bucket: one String => "Bucket" [required, len(1, 1024)],
        key: one String => "Key" [required, len(1, 1024)],
    }
}

shape! {
    /// Amazon S3 manifest.
    pub struct S3Parameters {
        manifest_file_location: one ManifestFileLocation => "ManifestFileLocation" [required],
    }
}

shape! {
    /// ServiceNow site.
    pub struct ServiceNowParameters {
        site_base_url: one String => "SiteBaseUrl" [required, len(1, 1024)],
    }
}

shape! {
    /// Snowflake warehouse.
    pub struct SnowflakeParameters {
        host: one String => "Host" [required, len(1, 256)],
        database: one String => "Database" [required, len(1, 128)],
        warehouse: one String => "Warehouse" [required, len(0, 128)],
    }
}

shape! {
    /// Apache Spark endpoint.
    pub struct SparkParameters {
        host: one String => "Host" [required, len(1, 256)],
        port: val i32 => "Port" [required, range(1, 65535)],
    }
}

shape! {
    /// SQL Server endpoint.
    pub struct SqlServerParameters {
        host: one String => "Host" [required, len(1, 256)],
        port: val i32 => "Port" [required, range(1, 65535)],
        database: one String => "Database" [required, len(1, 128)],
    }
}

shape! {
    /// Teradata endpoint.
    pub struct TeradataParameters {
        host: one String => "Host" [required, len(1, 256)],
        port: val i32 => "Port" [required, range(1, 65535)],
        database: one String => "Database" [required, len(1, 128)],
    }
}

shape! {
    /// Twitter search.
    pub struct TwitterParameters {
        query: one String => "Query" [required, len(1, 1024)],
        max_rows: val i32 => "MaxRows" [required, range(1, 2147483647)],
    }
}

union_shape! {
    /// Connection parameters of a data source; exactly one engine is chosen.
    pub enum DataSourceParameters {
        AmazonElasticsearch(AmazonElasticsearchParameters) => "AmazonElasticsearchParameters" as amazon_elasticsearch_parameters,
        Athena(AthenaParameters) => "AthenaParameters" as athena_parameters,
        Aurora(AuroraParameters) => "AuroraParameters" as aurora_parameters,
        AuroraPostgreSql(AuroraPostgreSqlParameters) => "AuroraPostgreSqlParameters" as aurora_postgre_sql_parameters,
        AwsIotAnalytics(AwsIotAnalyticsParameters) => "AwsIotAnalyticsParameters" as aws_iot_analytics_parameters,
        Jira(JiraParameters) => "JiraParameters" as jira_parameters,
        MariaDb(MariaDbParameters) => "MariaDbParameters" as maria_db_parameters,
        MySql(MySqlParameters) => "MySqlParameters" as my_sql_parameters,
        PostgreSql(PostgreSqlParameters) => "PostgreSqlParameters" as postgre_sql_parameters,
        Presto(PrestoParameters) => "PrestoParameters" as presto_parameters,
        Rds(RdsParameters) => "RdsParameters" as rds_parameters,
        Redshift(RedshiftParameters) => "RedshiftParameters" as redshift_parameters,
        S3(S3Parameters) => "S3Parameters" as s3_parameters,
        ServiceNow(ServiceNowParameters) => "ServiceNowParameters" as service_now_parameters,
        Snowflake(SnowflakeParameters) => "SnowflakeParameters" as snowflake_parameters,
        Spark(SparkParameters) => "SparkParameters" as spark_parameters,
        SqlServer(SqlServerParameters) => "SqlServerParameters" as sql_server_parameters,
        Teradata(TeradataParameters) => "TeradataParameters" as teradata_parameters,
        Twitter(TwitterParameters) => "TwitterParameters" as twitter_parameters,
    }
}

impl DataSourceParameters {
    /// Engine type matching the chosen parameters. RDS parameters fit several
    /// engines, so they have none.
    pub fn engine(&self) -> Option<DataSourceType> {
        let engine = match self {
            Self::AmazonElasticsearch(_) => DataSourceType::AmazonElasticsearch,
            Self::Athena(_) => DataSourceType::Athena,
            Self::Aurora(_) => DataSourceType::Aurora,
            Self::AuroraPostgreSql(_) => DataSourceType::AuroraPostgreSql,
            Self::AwsIotAnalytics(_) => DataSourceType::AwsIotAnalytics,
            Self::Jira(_) => DataSourceType::Jira,
            Self::MariaDb(_) => DataSourceType::MariaDb,
            Self::MySql(_) => DataSourceType::MySql,
            Self::PostgreSql(_) => DataSourceType::PostgreSql,
            Self::Presto(_) => DataSourceType::Presto,
            Self::Rds(_) | Self::Unknown { .. } => return None,
            Self::Redshift(_) => DataSourceType::Redshift,
            Self::S3(_) => DataSourceType::S3,
            Self::ServiceNow(_) => DataSourceType::ServiceNow,
            Self::Snowflake(_) => DataSourceType::Snowflake,
            Self::Spark(_) => DataSourceType::Spark,
            Self::SqlServer(_) => DataSourceType::SqlServer,
            Self::Teradata(_) => DataSourceType::Teradata,
            Self::Twitter(_) => DataSourceType::Twitter,
        };
        Some(engine)
    }
}

shape! {
    /// User name and password for a data source.
    pub struct CredentialPair {
        username: one String => "Username" [required, len(1, 64)],
        password: one SensitiveString => "Password" [required, len(1, 1024)],
        /// Further parameter sets the same credentials are valid for.
        alternate_data_source_parameters: list DataSourceParameters => "AlternateDataSourceParameters" [len(1, 50)],
    }
}

impl CredentialPair {
    pub fn new(username: impl Into<String>, password: impl Into<SensitiveString>) -> Self {
        Self::default().with_username(username).with_password(password)
    }
}

union_shape! {
    /// Credentials for a data source: a pair, or the ARN of a data source to copy them from.
    pub enum DataSourceCredentials {
        CredentialPair(CredentialPair) => "CredentialPair" as credential_pair,
        CopySourceArn(String) => "CopySourceArn" as copy_source_arn,
    }
}

shape! {
    /// VPC connection used to reach a data source.
    pub struct VpcConnectionProperties {
        vpc_connection_arn: one String => "VpcConnectionArn" [required],
    }
}

shape! {
    /// TLS settings for a data source connection.
    pub struct SslProperties {
        disable_ssl: val bool => "DisableSsl",
    }
}

shape! {
    /// Last connection error of a data source.
    pub struct DataSourceErrorInfo {
        error_type: one DataSourceErrorInfoType => "Type",
        message: one String => "Message",
    }
}

shape! {
    /// A data source as described by the service.
    pub struct DataSource {
        arn: one String => "Arn",
        data_source_id: one String => "DataSourceId",
        name: one String => "Name",
        data_source_type: one DataSourceType => "Type",
        status: one ResourceStatus => "Status",
        created_time: one Timestamp => "CreatedTime",
        last_updated_time: one Timestamp => "LastUpdatedTime",
        data_source_parameters: one DataSourceParameters => "DataSourceParameters",
        alternate_data_source_parameters: list DataSourceParameters => "AlternateDataSourceParameters",
        vpc_connection_properties: one VpcConnectionProperties => "VpcConnectionProperties",
        ssl_properties: one SslProperties => "SslProperties",
        error_info: one DataSourceErrorInfo => "ErrorInfo",
    }
}

shape! {
    /// Creates a data source.
    pub struct CreateDataSourceRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_source_id: one String => "DataSourceId" [required],
        name: one String => "Name" [required, len(1, 128)],
        data_source_type: one DataSourceType => "Type" [required],
        data_source_parameters: one DataSourceParameters => "DataSourceParameters",
        credentials: one DataSourceCredentials => "Credentials",
        permissions: list ResourcePermission => "Permissions" [len(1, 64)],
        vpc_connection_properties: one VpcConnectionProperties => "VpcConnectionProperties",
        ssl_properties: one SslProperties => "SslProperties",
        tags: list Tag => "Tags" [len(1, 200)],
    }
}

impl CreateDataSourceRequest {
    /// Set `DataSourceParameters` and, when it is implied, the matching `Type`.
    pub fn with_engine(self, parameters: impl Into<DataSourceParameters>) -> Self {
        let parameters = parameters.into();
        let engine = parameters.engine();
        let request = self.with_data_source_parameters(parameters);
        match engine {
            Some(engine) => request.with_data_source_type(engine),
            None => request,
        }
    }
}

shape! {
    pub struct CreateDataSourceResult {
        arn: one String => "Arn",
        data_source_id: one String => "DataSourceId",
        creation_status: one ResourceStatus => "CreationStatus",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Deletes a data source.
    pub struct DeleteDataSourceRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_source_id: one String => "DataSourceId" [required],
    }
}

shape! {
    pub struct DeleteDataSourceResult {
        arn: one String => "Arn",
        data_source_id: one String => "DataSourceId",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Describes a data source.
    pub struct DescribeDataSourceRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_source_id: one String => "DataSourceId" [required],
    }
}

shape! {
    pub struct DescribeDataSourceResult {
        data_source: one DataSource => "DataSource",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Describes the permissions on a data source.
    pub struct DescribeDataSourcePermissionsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_source_id: one String => "DataSourceId" [required],
    }
}

shape! {
    pub struct DescribeDataSourcePermissionsResult {
        data_source_arn: one String => "DataSourceArn",
        data_source_id: one String => "DataSourceId",
        permissions: list ResourcePermission => "Permissions",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Lists data sources in the current region.
    pub struct ListDataSourcesRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct ListDataSourcesResult {
        data_sources: list DataSource => "DataSources",
        next_token: one String => "NextToken",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Updates a data source.
    pub struct UpdateDataSourceRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_source_id: one String => "DataSourceId" [required],
        name: one String => "Name" [required, len(1, 128)],
        data_source_parameters: one DataSourceParameters => "DataSourceParameters",
        credentials: one DataSourceCredentials => "Credentials",
        vpc_connection_properties: one VpcConnectionProperties => "VpcConnectionProperties",
        ssl_properties: one SslProperties => "SslProperties",
    }
}

shape! {
    pub struct UpdateDataSourceResult {
        arn: one String => "Arn",
        data_source_id: one String => "DataSourceId",
        update_status: one ResourceStatus => "UpdateStatus",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Grants and revokes permissions on a data source.
    pub struct UpdateDataSourcePermissionsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_source_id: one String => "DataSourceId" [required],
        grant_permissions: list ResourcePermission => "GrantPermissions" [len(1, 100)],
        revoke_permissions: list ResourcePermission => "RevokePermissions" [len(1, 100)],
    }
}

shape! {
    pub struct UpdateDataSourcePermissionsResult {
        data_source_arn: one String => "DataSourceArn",
        data_source_id: one String => "DataSourceId",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}
