//! Dashboard models.
//!
//! Responsibilities:
//! - Define dashboard sources, parameter overrides, publish options, and
//!   version metadata.
//! - Define the dashboard request/result pairs, including embed URL retrieval
//!   and search.
//!
//! Non-responsibilities:
//! - Does not render or evaluate dashboards.

use rust_decimal::Decimal;

use crate::models::common::{ResourcePermission, Tag};
use crate::models::enums::{
    DashboardBehavior, DashboardErrorType, DashboardFilterAttribute, DashboardUiState,
    FilterOperator, IdentityType, ResourceStatus,
};
use crate::shape;
use crate::types::{SensitiveString, Timestamp};

shape! {
    /// Binds a template placeholder to a concrete data set.
    pub struct DataSetReference {
        data_set_placeholder: one String => "DataSetPlaceholder" [required],
        data_set_arn: one String => "DataSetArn" [required],
    }
}

impl DataSetReference {
    pub fn new(placeholder: impl Into<String>, data_set_arn: impl Into<String>) -> Self {
        Self::default()
            .with_data_set_placeholder(placeholder)
            .with_data_set_arn(data_set_arn)
    }
}

shape! {
    /// Template a dashboard is created from.
    pub struct DashboardSourceTemplate {
        data_set_references: list DataSetReference => "DataSetReferences" [required, len(1, 100)],
        arn: one String => "Arn" [required],
    }
}

shape! {
    pub struct DashboardSourceEntity {
        source_template: one DashboardSourceTemplate => "SourceTemplate",
    }
}

shape! {
    pub struct StringParameter {
        name: one String => "Name" [required],
        values: list String => "Values" [required],
    }
}

shape! {
    pub struct IntegerParameter {
        name: one String => "Name" [required],
        values: list i64 => "Values" [required],
    }
}

shape! {
    pub struct DecimalParameter {
        name: one String => "Name" [required],
        values: list Decimal => "Values" [required],
    }
}

shape! {
    pub struct DateTimeParameter {
        name: one String => "Name" [required],
        values: list Timestamp => "Values" [required],
    }
}

shape! {
    /// Parameter value overrides applied when a dashboard is created or updated.
    pub struct Parameters {
        string_parameters: list StringParameter => "StringParameters" [len(0, 100)],
        integer_parameters: list IntegerParameter => "IntegerParameters" [len(0, 100)],
        decimal_parameters: list DecimalParameter => "DecimalParameters" [len(0, 100)],
        date_time_parameters: list DateTimeParameter => "DateTimeParameters" [len(0, 100)],
    }
}

shape! {
    pub struct AdHocFilteringOption {
        availability_status: one DashboardBehavior => "AvailabilityStatus",
    }
}

shape! {
    pub struct ExportToCsvOption {
        availability_status: one DashboardBehavior => "AvailabilityStatus",
    }
}

shape! {
    pub struct SheetControlsOption {
        visibility_state: one DashboardUiState => "VisibilityState",
    }
}

shape! {
    /// Reader-facing features of a published dashboard.
    pub struct DashboardPublishOptions {
        ad_hoc_filtering_option: one AdHocFilteringOption => "AdHocFilteringOption",
        export_to_csv_option: one ExportToCsvOption => "ExportToCSVOption",
        sheet_controls_option: one SheetControlsOption => "SheetControlsOption",
    }
}

shape! {
    pub struct DashboardError {
        error_type: one DashboardErrorType => "Type",
        message: one String => "Message",
    }
}

shape! {
    pub struct DashboardVersion {
        created_time: one Timestamp => "CreatedTime",
        errors: list DashboardError => "Errors",
        version_number: val i64 => "VersionNumber",
        status: one ResourceStatus => "Status",
        arn: one String => "Arn",
        source_entity_arn: one String => "SourceEntityArn",
        data_set_arns: list String => "DataSetArns",
        description: one String => "Description",
    }
}

shape! {
    /// A dashboard as described by the service.
    pub struct Dashboard {
        dashboard_id: one String => "DashboardId",
        arn: one String => "Arn",
        name: one String => "Name",
        version: one DashboardVersion => "Version",
        created_time: one Timestamp => "CreatedTime",
        last_published_time: one Timestamp => "LastPublishedTime",
        last_updated_time: one Timestamp => "LastUpdatedTime",
    }
}

shape! {
    pub struct DashboardSummary {
        arn: one String => "Arn",
        dashboard_id: one String => "DashboardId",
        name: one String => "Name",
        created_time: one Timestamp => "CreatedTime",
        last_updated_time: one Timestamp => "LastUpdatedTime",
        published_version_number: val i64 => "PublishedVersionNumber",
        last_published_time: one Timestamp => "LastPublishedTime",
    }
}

shape! {
    pub struct DashboardVersionSummary {
        arn: one String => "Arn",
        created_time: one Timestamp => "CreatedTime",
        version_number: val i64 => "VersionNumber",
        status: one ResourceStatus => "Status",
        source_entity_arn: one String => "SourceEntityArn",
        description: one String => "Description",
    }
}

shape! {
    /// Filter for dashboard search.
    pub struct DashboardSearchFilter {
        operator: one FilterOperator => "Operator" [required],
        name: one DashboardFilterAttribute => "Name",
        value: one String => "Value",
    }
}

shape! {
    /// Creates a dashboard from a template.
    pub struct CreateDashboardRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        dashboard_id: one String => "DashboardId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        name: one String => "Name" [required, len(1, 2048)],
        parameters: one Parameters => "Parameters",
        permissions: list ResourcePermission => "Permissions" [len(1, 64)],
        source_entity: one DashboardSourceEntity => "SourceEntity" [required],
        tags: list Tag => "Tags" [len(1, 200)],
        version_description: one String => "VersionDescription" [len(1, 512)],
        dashboard_publish_options: one DashboardPublishOptions => "DashboardPublishOptions",
    }
}

shape! {
    pub struct CreateDashboardResult {
        arn: one String => "Arn",
        version_arn: one String => "VersionArn",
        dashboard_id: one String => "DashboardId",
        creation_status: one ResourceStatus => "CreationStatus",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Deletes a dashboard, or one version of it.
    pub struct DeleteDashboardRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        dashboard_id: one String => "DashboardId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        version_number: val i64 => "VersionNumber" [range(1, 9223372036854775807)],
    }
}

shape! {
    pub struct DeleteDashboardResult {
        status: val i32 => "Status",
        arn: one String => "Arn",
        dashboard_id: one String => "DashboardId",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Describes a dashboard, optionally at a version or alias.
    pub struct DescribeDashboardRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        dashboard_id: one String => "DashboardId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        version_number: val i64 => "VersionNumber" [range(1, 9223372036854775807)],
        alias_name: one String => "AliasName" [len(1, 2048), pattern("[\\w\\-]+|(\\$LATEST)|(\\$PUBLISHED)")],
    }
}

shape! {
    pub struct DescribeDashboardResult {
        dashboard: one Dashboard => "Dashboard",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Describes the permissions on a dashboard.
    pub struct DescribeDashboardPermissionsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        dashboard_id: one String => "DashboardId" [required, len(1, 2048), pattern("[\\w\\-]+")],
    }
}

shape! {
    pub struct DescribeDashboardPermissionsResult {
        dashboard_id: one String => "DashboardId",
        dashboard_arn: one String => "DashboardArn",
        permissions: list ResourcePermission => "Permissions",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Requests a short-lived URL that embeds a dashboard.
    pub struct GetDashboardEmbedUrlRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        dashboard_id: one String => "DashboardId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        identity_type: one IdentityType => "IdentityType" [required],
        session_lifetime_in_minutes: val i64 => "SessionLifetimeInMinutes" [range(15, 600)],
        undo_redo_disabled: val bool => "UndoRedoDisabled",
        reset_disabled: val bool => "ResetDisabled",
        user_arn: one String => "UserArn",
    }
}

shape! {
    pub struct GetDashboardEmbedUrlResult {
        /// Single-use URL; redacted when rendered.
        embed_url: one SensitiveString => "EmbedUrl",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Lists the versions of a dashboard.
    pub struct ListDashboardVersionsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        dashboard_id: one String => "DashboardId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct ListDashboardVersionsResult {
        dashboard_version_summary_list: list DashboardVersionSummary => "DashboardVersionSummaryList",
        next_token: one String => "NextToken",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Lists dashboards in an account.
    pub struct ListDashboardsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct ListDashboardsResult {
        dashboard_summary_list: list DashboardSummary => "DashboardSummaryList",
        next_token: one String => "NextToken",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Searches dashboards by filter.
    pub struct SearchDashboardsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        filters: list DashboardSearchFilter => "Filters" [required, len(1, 1)],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct SearchDashboardsResult {
        dashboard_summary_list: list DashboardSummary => "DashboardSummaryList",
        next_token: one String => "NextToken",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Updates a dashboard, creating a new version.
    pub struct UpdateDashboardRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        dashboard_id: one String => "DashboardId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        name: one String => "Name" [required, len(1, 2048)],
        source_entity: one DashboardSourceEntity => "SourceEntity" [required],
        parameters: one Parameters => "Parameters",
        version_description: one String => "VersionDescription" [len(1, 512)],
        dashboard_publish_options: one DashboardPublishOptions => "DashboardPublishOptions",
    }
}

shape! {
    pub struct UpdateDashboardResult {
        arn: one String => "Arn",
        version_arn: one String => "VersionArn",
        dashboard_id: one String => "DashboardId",
        creation_status: one ResourceStatus => "CreationStatus",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Grants and revokes permissions on a dashboard.
    pub struct UpdateDashboardPermissionsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        dashboard_id: one String => "DashboardId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        grant_permissions: list ResourcePermission => "GrantPermissions" [len(0, 100)],
        revoke_permissions: list ResourcePermission => "RevokePermissions" [len(0, 100)],
    }
}

shape! {
    pub struct UpdateDashboardPermissionsResult {
        dashboard_arn: one String => "DashboardArn",
        dashboard_id: one String => "DashboardId",
        permissions: list ResourcePermission => "Permissions",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Selects the version readers see.
    pub struct UpdateDashboardPublishedVersionRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        dashboard_id: one String => "DashboardId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        version_number: val i64 => "VersionNumber" [required, range(1, 9223372036854775807)],
    }
}

shape! {
    pub struct UpdateDashboardPublishedVersionResult {
        dashboard_id: one String => "DashboardId",
        dashboard_arn: one String => "DashboardArn",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}
