//! Enumerated string domains used by the models.
//!
//! Every enum keeps values outside its documented domain in `Unknown(raw)`;
//! see `string_enum` for the generated API.

use crate::string_enum;

string_enum! {
    /// Status of an IAM policy assignment.
    pub enum AssignmentStatus {
        Enabled => "ENABLED",
        Draft => "DRAFT",
        Disabled => "DISABLED",
    }
}

string_enum! {
    /// Data type of a data set column.
    pub enum ColumnDataType {
        String => "STRING",
        Integer => "INTEGER",
        Decimal => "DECIMAL",
        DateTime => "DATETIME",
    }
}

string_enum! {
    /// Availability of a dashboard feature.
    pub enum DashboardBehavior {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

string_enum! {
    pub enum DashboardErrorType {
        AccessDenied => "ACCESS_DENIED",
        SourceNotFound => "SOURCE_NOT_FOUND",
        DataSetNotFound => "DATA_SET_NOT_FOUND",
        InternalFailure => "INTERNAL_FAILURE",
        ParameterValueIncompatible => "PARAMETER_VALUE_INCOMPATIBLE",
        ParameterTypeInvalid => "PARAMETER_TYPE_INVALID",
        ParameterNotFound => "PARAMETER_NOT_FOUND",
        ColumnTypeMismatch => "COLUMN_TYPE_MISMATCH",
        ColumnGeographicRoleMismatch => "COLUMN_GEOGRAPHIC_ROLE_MISMATCH",
        ColumnReplacementMissing => "COLUMN_REPLACEMENT_MISSING",
    }
}

string_enum! {
    /// Attribute a dashboard search filter applies to.
    pub enum DashboardFilterAttribute {
        QuickSightUser => "QUICKSIGHT_USER",
    }
}

string_enum! {
    /// Initial visibility of dashboard sheet controls.
    pub enum DashboardUiState {
        Expanded => "EXPANDED",
        Collapsed => "COLLAPSED",
    }
}

string_enum! {
    /// Whether a data set is imported into SPICE or queried directly.
    pub enum DataSetImportMode {
        Spice => "SPICE",
        DirectQuery => "DIRECT_QUERY",
    }
}

string_enum! {
    pub enum DataSourceErrorInfoType {
        Timeout => "TIMEOUT",
        EngineVersionNotSupported => "ENGINE_VERSION_NOT_SUPPORTED",
        UnknownHost => "UNKNOWN_HOST",
        GenericSqlFailure => "GENERIC_SQL_FAILURE",
        Conflict => "CONFLICT",
        Unclassified => "UNKNOWN",
    }
}

string_enum! {
    /// Engine behind a data source.
    pub enum DataSourceType {
        AdobeAnalytics => "ADOBE_ANALYTICS",
        AmazonElasticsearch => "AMAZON_ELASTICSEARCH",
        Athena => "ATHENA",
        Aurora => "AURORA",
        AuroraPostgreSql => "AURORA_POSTGRESQL",
        AwsIotAnalytics => "AWS_IOT_ANALYTICS",
        Github => "GITHUB",
        Jira => "JIRA",
        MariaDb => "MARIADB",
        MySql => "MYSQL",
        PostgreSql => "POSTGRESQL",
        Presto => "PRESTO",
        Redshift => "REDSHIFT",
        S3 => "S3",
        Salesforce => "SALESFORCE",
        ServiceNow => "SERVICENOW",
        Snowflake => "SNOWFLAKE",
        Spark => "SPARK",
        SqlServer => "SQLSERVER",
        Teradata => "TERADATA",
        Twitter => "TWITTER",
    }
}

string_enum! {
    /// Format of an uploaded file.
    pub enum FileFormat {
        Csv => "CSV",
        Tsv => "TSV",
        Clf => "CLF",
        Elf => "ELF",
        Xlsx => "XLSX",
        Json => "JSON",
    }
}

string_enum! {
    pub enum FilterOperator {
        StringEquals => "StringEquals",
    }
}

string_enum! {
    pub enum GeoSpatialCountryCode {
        Us => "US",
    }
}

string_enum! {
    /// Geographic role of a column.
    pub enum GeoSpatialDataRole {
        Country => "COUNTRY",
        State => "STATE",
        County => "COUNTY",
        City => "CITY",
        Postcode => "POSTCODE",
        Longitude => "LONGITUDE",
        Latitude => "LATITUDE",
    }
}

string_enum! {
    pub enum IdentityStore {
        QuickSight => "QUICKSIGHT",
    }
}

string_enum! {
    /// How a user authenticates.
    pub enum IdentityType {
        Iam => "IAM",
        QuickSight => "QUICKSIGHT",
    }
}

string_enum! {
    /// Reason an ingestion failed.
    pub enum IngestionErrorType {
        FailureToAssumeRole => "FAILURE_TO_ASSUME_ROLE",
        IngestionSuperseded => "INGESTION_SUPERSEDED",
        IngestionCanceled => "INGESTION_CANCELED",
        DataSetDeleted => "DATA_SET_DELETED",
        DataSetNotSpice => "DATA_SET_NOT_SPICE",
        S3UploadedFileDeleted => "S3_UPLOADED_FILE_DELETED",
        S3ManifestError => "S3_MANIFEST_ERROR",
        DataToleranceException => "DATA_TOLERANCE_EXCEPTION",
        SpiceTableNotFound => "SPICE_TABLE_NOT_FOUND",
        DataSetSizeLimitExceeded => "DATA_SET_SIZE_LIMIT_EXCEEDED",
        RowSizeLimitExceeded => "ROW_SIZE_LIMIT_EXCEEDED",
        AccountCapacityLimitExceeded => "ACCOUNT_CAPACITY_LIMIT_EXCEEDED",
        CustomerError => "CUSTOMER_ERROR",
        DataSourceNotFound => "DATA_SOURCE_NOT_FOUND",
        IamRoleNotAvailable => "IAM_ROLE_NOT_AVAILABLE",
        ConnectionFailure => "CONNECTION_FAILURE",
        SqlTableNotFound => "SQL_TABLE_NOT_FOUND",
        PermissionDenied => "PERMISSION_DENIED",
        SslCertificateValidationFailure => "SSL_CERTIFICATE_VALIDATION_FAILURE",
        OauthTokenFailure => "OAUTH_TOKEN_FAILURE",
        SourceApiLimitExceededFailure => "SOURCE_API_LIMIT_EXCEEDED_FAILURE",
        PasswordAuthenticationFailure => "PASSWORD_AUTHENTICATION_FAILURE",
        SqlSchemaMismatchError => "SQL_SCHEMA_MISMATCH_ERROR",
        InvalidDateFormat => "INVALID_DATE_FORMAT",
        InvalidDataprepSyntax => "INVALID_DATAPREP_SYNTAX",
        SourceResourceLimitExceeded => "SOURCE_RESOURCE_LIMIT_EXCEEDED",
        SqlInvalidParameterValue => "SQL_INVALID_PARAMETER_VALUE",
        QueryTimeout => "QUERY_TIMEOUT",
        SqlNumericOverflow => "SQL_NUMERIC_OVERFLOW",
        UnresolvableHost => "UNRESOLVABLE_HOST",
        UnroutableHost => "UNROUTABLE_HOST",
        SqlException => "SQL_EXCEPTION",
        S3FileInaccessible => "S3_FILE_INACCESSIBLE",
        IotFileNotFound => "IOT_FILE_NOT_FOUND",
        IotDataSetFileEmpty => "IOT_DATA_SET_FILE_EMPTY",
        InvalidDataSourceConfig => "INVALID_DATA_SOURCE_CONFIG",
        DataSourceAuthFailed => "DATA_SOURCE_AUTH_FAILED",
        DataSourceConnectionFailed => "DATA_SOURCE_CONNECTION_FAILED",
        FailureToProcessJsonFile => "FAILURE_TO_PROCESS_JSON_FILE",
        InternalServiceError => "INTERNAL_SERVICE_ERROR",
    }
}

string_enum! {
    pub enum IngestionRequestSource {
        Manual => "MANUAL",
        Scheduled => "SCHEDULED",
    }
}

string_enum! {
    pub enum IngestionRequestType {
        InitialIngestion => "INITIAL_INGESTION",
        Edit => "EDIT",
        IncrementalRefresh => "INCREMENTAL_REFRESH",
        FullRefresh => "FULL_REFRESH",
    }
}

string_enum! {
    /// Lifecycle state of an ingestion.
    pub enum IngestionStatus {
        Initialized => "INITIALIZED",
        Queued => "QUEUED",
        Running => "RUNNING",
        Failed => "FAILED",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

string_enum! {
    /// Data type of a source column.
    pub enum InputColumnDataType {
        String => "STRING",
        Integer => "INTEGER",
        Decimal => "DECIMAL",
        DateTime => "DATETIME",
        Bit => "BIT",
        Boolean => "BOOLEAN",
        Json => "JSON",
    }
}

string_enum! {
    pub enum JoinType {
        Inner => "INNER",
        Outer => "OUTER",
        Left => "LEFT",
        Right => "RIGHT",
    }
}

string_enum! {
    /// Lifecycle state of a created or updated resource.
    pub enum ResourceStatus {
        CreationInProgress => "CREATION_IN_PROGRESS",
        CreationSuccessful => "CREATION_SUCCESSFUL",
        CreationFailed => "CREATION_FAILED",
        UpdateInProgress => "UPDATE_IN_PROGRESS",
        UpdateSuccessful => "UPDATE_SUCCESSFUL",
        UpdateFailed => "UPDATE_FAILED",
    }
}

string_enum! {
    pub enum RowLevelPermissionPolicy {
        GrantAccess => "GRANT_ACCESS",
        DenyAccess => "DENY_ACCESS",
    }
}

string_enum! {
    pub enum TemplateErrorType {
        SourceNotFound => "SOURCE_NOT_FOUND",
        DataSetNotFound => "DATA_SET_NOT_FOUND",
        InternalFailure => "INTERNAL_FAILURE",
    }
}

string_enum! {
    pub enum TextQualifier {
        DoubleQuote => "DOUBLE_QUOTE",
        SingleQuote => "SINGLE_QUOTE",
    }
}

string_enum! {
    /// Role of a registered user.
    pub enum UserRole {
        Admin => "ADMIN",
        Author => "AUTHOR",
        Reader => "READER",
        RestrictedAuthor => "RESTRICTED_AUTHOR",
        RestrictedReader => "RESTRICTED_READER",
    }
}

macro_rules! catalog {
    ($($name:ident),* $(,)?) => {
        /// Every enum domain as `(name, documented values)`, sorted by name.
        pub static DOMAINS: &[(&str, &[&str])] = &[$((stringify!($name), $name::VALUES)),*];
    };
}

catalog![
    AssignmentStatus,
    ColumnDataType,
    DashboardBehavior,
    DashboardErrorType,
    DashboardFilterAttribute,
    DashboardUiState,
    DataSetImportMode,
    DataSourceErrorInfoType,
    DataSourceType,
    FileFormat,
    FilterOperator,
    GeoSpatialCountryCode,
    GeoSpatialDataRole,
    IdentityStore,
    IdentityType,
    IngestionErrorType,
    IngestionRequestSource,
    IngestionRequestType,
    IngestionStatus,
    InputColumnDataType,
    JoinType,
    ResourceStatus,
    RowLevelPermissionPolicy,
    TemplateErrorType,
    TextQualifier,
    UserRole,
];

/// Look up an enum domain by name, ignoring ASCII case.
pub fn domain(name: &str) -> Option<&'static [&'static str]> {
    DOMAINS
        .iter()
        .find(|(domain, _)| domain.eq_ignore_ascii_case(name))
        .map(|(_, values)| *values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_wire_value_has_its_own_variant() {
        assert_eq!(
            DataSourceErrorInfoType::from("UNKNOWN"),
            DataSourceErrorInfoType::Unclassified
        );
        assert!(DataSourceErrorInfoType::Unclassified.is_known());
    }

    #[test]
    fn test_domains_are_sorted_and_unique() {
        let names: Vec<&str> = DOMAINS.iter().map(|(name, _)| *name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_domain_lookup_ignores_case() {
        assert_eq!(domain("datasettype"), None);
        assert_eq!(domain("dataSetImportMode"), Some(&["SPICE", "DIRECT_QUERY"][..]));
    }
}
