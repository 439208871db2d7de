//! Template models.
//!
//! Responsibilities:
//! - Define template sources (an analysis or another template), version
//!   metadata, aliases, and the data set schema a template expects.
//! - Define the template and template alias request/result pairs.

use crate::models::common::{ResourcePermission, Tag};
use crate::models::dashboards::DataSetReference;
use crate::models::enums::{ResourceStatus, TemplateErrorType};
use crate::types::Timestamp;
use crate::{shape, union_shape};

shape! {
    /// An analysis to build a template from.
    pub struct TemplateSourceAnalysis {
        arn: one String => "Arn" [required],
        data_set_references: list DataSetReference => "DataSetReferences" [required, len(1, 100)],
    }
}

shape! {
    /// An existing template to copy.
    pub struct TemplateSourceTemplate {
        arn: one String => "Arn" [required],
    }
}

union_shape! {
    /// What a template version is created from.
    pub enum TemplateSourceEntity {
        SourceAnalysis(TemplateSourceAnalysis) => "SourceAnalysis" as source_analysis,
        SourceTemplate(TemplateSourceTemplate) => "SourceTemplate" as source_template,
    }
}

shape! {
    pub struct ColumnSchema {
        name: one String => "Name",
        data_type: one String => "DataType",
        geographic_role: one String => "GeographicRole",
    }
}

shape! {
    pub struct DataSetSchema {
        column_schema_list: list ColumnSchema => "ColumnSchemaList" [len(0, 500)],
    }
}

shape! {
    pub struct ColumnGroupColumnSchema {
        name: one String => "Name",
    }
}

shape! {
    pub struct ColumnGroupSchema {
        name: one String => "Name",
        column_group_column_schema_list: list ColumnGroupColumnSchema => "ColumnGroupColumnSchemaList" [len(0, 500)],
    }
}

shape! {
    /// Shape of the data set a template placeholder expects.
    pub struct DataSetConfiguration {
        placeholder: one String => "Placeholder",
        data_set_schema: one DataSetSchema => "DataSetSchema",
        column_group_schema_list: list ColumnGroupSchema => "ColumnGroupSchemaList" [len(0, 500)],
    }
}

shape! {
    pub struct TemplateError {
        error_type: one TemplateErrorType => "Type",
        message: one String => "Message",
    }
}

shape! {
    pub struct TemplateVersion {
        created_time: one Timestamp => "CreatedTime",
        errors: list TemplateError => "Errors",
        version_number: val i64 => "VersionNumber",
        status: one ResourceStatus => "Status",
        data_set_configurations: list DataSetConfiguration => "DataSetConfigurations",
        description: one String => "Description",
        source_entity_arn: one String => "SourceEntityArn",
    }
}

shape! {
    /// A template as described by the service.
    pub struct Template {
        arn: one String => "Arn",
        name: one String => "Name",
        version: one TemplateVersion => "Version",
        template_id: one String => "TemplateId",
        last_updated_time: one Timestamp => "LastUpdatedTime",
        created_time: one Timestamp => "CreatedTime",
    }
}

shape! {
    pub struct TemplateSummary {
        arn: one String => "Arn",
        template_id: one String => "TemplateId",
        name: one String => "Name",
        latest_version_number: val i64 => "LatestVersionNumber",
        created_time: one Timestamp => "CreatedTime",
        last_updated_time: one Timestamp => "LastUpdatedTime",
    }
}

shape! {
    pub struct TemplateVersionSummary {
        arn: one String => "Arn",
        version_number: val i64 => "VersionNumber",
        created_time: one Timestamp => "CreatedTime",
        status: one ResourceStatus => "Status",
        description: one String => "Description",
    }
}

shape! {
    /// A named pointer to a template version.
    pub struct TemplateAlias {
        alias_name: one String => "AliasName",
        arn: one String => "Arn",
        template_version_number: val i64 => "TemplateVersionNumber",
    }
}

shape! {
    /// Creates a template from an analysis or another template.
    pub struct CreateTemplateRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        name: one String => "Name" [len(1, 2048)],
        permissions: list ResourcePermission => "Permissions" [len(1, 64)],
        source_entity: one TemplateSourceEntity => "SourceEntity" [required],
        tags: list Tag => "Tags" [len(1, 200)],
        version_description: one String => "VersionDescription" [len(1, 512)],
    }
}

shape! {
    pub struct CreateTemplateResult {
        arn: one String => "Arn",
        version_arn: one String => "VersionArn",
        template_id: one String => "TemplateId",
        creation_status: one ResourceStatus => "CreationStatus",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Points an alias at a template version.
    pub struct CreateTemplateAliasRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        alias_name: one String => "AliasName" [required, len(1, 2048), pattern("[\\w\\-]+|(\\$LATEST)|(\\$PUBLISHED)")],
        template_version_number: val i64 => "TemplateVersionNumber" [required, range(1, 9223372036854775807)],
    }
}

shape! {
    pub struct CreateTemplateAliasResult {
        template_alias: one TemplateAlias => "TemplateAlias",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Deletes a template, or one version of it.
    pub struct DeleteTemplateRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        version_number: val i64 => "VersionNumber" [range(1, 9223372036854775807)],
    }
}

shape! {
    pub struct DeleteTemplateResult {
        request_id: one String => "RequestId",
        arn: one String => "Arn",
        template_id: one String => "TemplateId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Deletes a template alias.
    pub struct DeleteTemplateAliasRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        alias_name: one String => "AliasName" [required, len(1, 2048), pattern("[\\w\\-]+|(\\$LATEST)|(\\$PUBLISHED)")],
    }
}

shape! {
    pub struct DeleteTemplateAliasResult {
        status: val i32 => "Status",
        template_id: one String => "TemplateId",
        alias_name: one String => "AliasName",
        arn: one String => "Arn",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Describes a template, optionally at a version or alias.
    pub struct DescribeTemplateRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        version_number: val i64 => "VersionNumber" [range(1, 9223372036854775807)],
        alias_name: one String => "AliasName" [len(1, 2048), pattern("[\\w\\-]+|(\\$LATEST)|(\\$PUBLISHED)")],
    }
}

shape! {
    pub struct DescribeTemplateResult {
        template: one Template => "Template",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    pub struct DescribeTemplateAliasRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        alias_name: one String => "AliasName" [required, len(1, 2048), pattern("[\\w\\-]+|(\\$LATEST)|(\\$PUBLISHED)")],
    }
}

shape! {
    pub struct DescribeTemplateAliasResult {
        template_alias: one TemplateAlias => "TemplateAlias",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    pub struct DescribeTemplatePermissionsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
    }
}

shape! {
    pub struct DescribeTemplatePermissionsResult {
        template_id: one String => "TemplateId",
        template_arn: one String => "TemplateArn",
        permissions: list ResourcePermission => "Permissions",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    pub struct ListTemplateAliasesRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct ListTemplateAliasesResult {
        template_alias_list: list TemplateAlias => "TemplateAliasList",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
        next_token: one String => "NextToken",
    }
}

shape! {
    pub struct ListTemplateVersionsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct ListTemplateVersionsResult {
        template_version_summary_list: list TemplateVersionSummary => "TemplateVersionSummaryList",
        next_token: one String => "NextToken",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    pub struct ListTemplatesRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct ListTemplatesResult {
        template_summary_list: list TemplateSummary => "TemplateSummaryList",
        next_token: one String => "NextToken",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Updates a template, creating a new version.
    pub struct UpdateTemplateRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        source_entity: one TemplateSourceEntity => "SourceEntity" [required],
        version_description: one String => "VersionDescription" [len(1, 512)],
        name: one String => "Name" [len(1, 2048)],
    }
}

shape! {
    pub struct UpdateTemplateResult {
        template_id: one String => "TemplateId",
        arn: one String => "Arn",
        version_arn: one String => "VersionArn",
        creation_status: one ResourceStatus => "CreationStatus",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    pub struct UpdateTemplateAliasRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        alias_name: one String => "AliasName" [required, len(1, 2048), pattern("[\\w\\-]+|(\\$LATEST)|(\\$PUBLISHED)")],
        template_version_number: val i64 => "TemplateVersionNumber" [required, range(1, 9223372036854775807)],
    }
}

shape! {
    pub struct UpdateTemplateAliasResult {
        template_alias: one TemplateAlias => "TemplateAlias",
        status: val i32 => "Status",
        request_id: one String => "RequestId",
    }
}

shape! {
    /// Grants and revokes permissions on a template.
    pub struct UpdateTemplatePermissionsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        template_id: one String => "TemplateId" [required, len(1, 2048), pattern("[\\w\\-]+")],
        grant_permissions: list ResourcePermission => "GrantPermissions" [len(0, 100)],
        revoke_permissions: list ResourcePermission => "RevokePermissions" [len(0, 100)],
    }
}

shape! {
    pub struct UpdateTemplatePermissionsResult {
        template_id: one String => "TemplateId",
        template_arn: one String => "TemplateArn",
        permissions: list ResourcePermission => "Permissions",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}
