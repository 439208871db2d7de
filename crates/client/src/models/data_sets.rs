//! Data set models.
//!
//! Responsibilities:
//! - Define physical tables (relational, custom SQL, S3), logical tables with
//!   their transform pipelines, column groups, and row-level permissions.
//! - Define the data set request/result pairs.
//!
//! Non-responsibilities:
//! - Does not evaluate transforms or SQL.

use crate::models::common::{ResourcePermission, Tag};
use crate::models::enums::{
    ColumnDataType, DataSetImportMode, FileFormat, GeoSpatialCountryCode, GeoSpatialDataRole,
    InputColumnDataType, JoinType, RowLevelPermissionPolicy, TextQualifier,
};
use crate::types::Timestamp;
use crate::{shape, union_shape};

shape! {
    /// A column read from a physical source.
    pub struct InputColumn {
        name: one String => "Name" [required, len(1, 128)],
        column_type: one InputColumnDataType => "Type" [required],
    }
}

impl InputColumn {
    pub fn new(name: impl Into<String>, column_type: impl Into<InputColumnDataType>) -> Self {
        Self::default().with_name(name).with_column_type(column_type)
    }
}

shape! {
    /// A table of a relational data source.
    pub struct RelationalTable {
        data_source_arn: one String => "DataSourceArn" [required],
        schema: one String => "Schema" [len(0, 64)],
        name: one String => "Name" [required, len(1, 64)],
        input_columns: list InputColumn => "InputColumns" [required, len(1, 2048)],
    }
}

shape! {
    /// A SQL query run against a data source.
    pub struct CustomSql {
        data_source_arn: one String => "DataSourceArn" [required],
        name: one String => "Name" [required, len(1, 128)],
        sql_query: one String => "SqlQuery" [required, len(1, 65536)],
        columns: list InputColumn => "Columns" [len(1, 2048)],
    }
}

shape! {
    /// How an uploaded file is parsed.
    pub struct UploadSettings {
        format: one FileFormat => "Format",
        start_from_row: val i32 => "StartFromRow" [range(1, 2147483647)],
        contains_header: val bool => "ContainsHeader",
        text_qualifier: one TextQualifier => "TextQualifier",
        delimiter: one String => "Delimiter" [len(1, 1)],
    }
}

shape! {
    /// A file source in S3.
    pub struct S3Source {
        data_source_arn: one String => "DataSourceArn" [required],
        upload_settings: one UploadSettings => "UploadSettings",
        input_columns: list InputColumn => "InputColumns" [required, len(1, 2048)],
    }
}

union_shape! {
    /// Where a physical table reads its rows from.
    pub enum PhysicalTable {
        RelationalTable(RelationalTable) => "RelationalTable" as relational_table,
        CustomSql(CustomSql) => "CustomSql" as custom_sql,
        S3Source(S3Source) => "S3Source" as s3_source,
    }
}

shape! {
    /// Join of two logical tables.
    pub struct JoinInstruction {
        left_operand: one String => "LeftOperand" [required, len(1, 64), pattern("[0-9a-zA-Z-]*")],
        right_operand: one String => "RightOperand" [required, len(1, 64), pattern("[0-9a-zA-Z-]*")],
        join_type: one JoinType => "Type" [required],
        on_clause: one String => "OnClause" [required, len(1, 512)],
    }
}

union_shape! {
    /// Source of a logical table: a join, or a physical table by id.
    pub enum LogicalTableSource {
        JoinInstruction(JoinInstruction) => "JoinInstruction" as join_instruction,
        PhysicalTableId(String) => "PhysicalTableId" as physical_table_id,
    }
}

shape! {
    /// Keeps only the listed columns.
    pub struct ProjectOperation {
        projected_columns: list String => "ProjectedColumns" [required, len(1, 2000)],
    }
}

shape! {
    /// Keeps rows matching a condition.
    pub struct FilterOperation {
        condition_expression: one String => "ConditionExpression" [required, len(1, 4096)],
    }
}

shape! {
    /// A column computed from an expression.
    pub struct CalculatedColumn {
        column_name: one String => "ColumnName" [required, len(1, 128)],
        column_id: one String => "ColumnId" [required, len(1, 64)],
        expression: one String => "Expression" [required, len(1, 4096)],
    }
}

shape! {
    pub struct CreateColumnsOperation {
        columns: list CalculatedColumn => "Columns" [required, len(1, 128)],
    }
}

shape! {
    pub struct RenameColumnOperation {
        column_name: one String => "ColumnName" [required, len(1, 128)],
        new_column_name: one String => "NewColumnName" [required, len(1, 128)],
    }
}

shape! {
    pub struct CastColumnTypeOperation {
        column_name: one String => "ColumnName" [required, len(1, 128)],
        new_column_type: one ColumnDataType => "NewColumnType" [required],
        /// Date format used when casting strings to dates.
        format: one String => "Format" [len(0, 32)],
    }
}

union_shape! {
    /// A tag attached to a column.
    pub enum ColumnTag {
        ColumnGeographicRole(GeoSpatialDataRole) => "ColumnGeographicRole" as column_geographic_role,
    }
}

shape! {
    pub struct TagColumnOperation {
        column_name: one String => "ColumnName" [required, len(1, 128)],
        tags: list ColumnTag => "Tags" [required, len(1, 16)],
    }
}

union_shape! {
    /// One step of a logical table's transform pipeline.
    pub enum TransformOperation {
        Project(ProjectOperation) => "ProjectOperation" as project_operation,
        Filter(FilterOperation) => "FilterOperation" as filter_operation,
        CreateColumns(CreateColumnsOperation) => "CreateColumnsOperation" as create_columns_operation,
        RenameColumn(RenameColumnOperation) => "RenameColumnOperation" as rename_column_operation,
        CastColumnType(CastColumnTypeOperation) => "CastColumnTypeOperation" as cast_column_type_operation,
        TagColumn(TagColumnOperation) => "TagColumnOperation" as tag_column_operation,
    }
}

shape! {
    /// A table built from a source and a sequence of transforms.
    pub struct LogicalTable {
        alias: one String => "Alias" [required, len(1, 64)],
        data_transforms: list TransformOperation => "DataTransforms" [len(1, 2048)],
        source: one LogicalTableSource => "Source" [required],
    }
}

shape! {
    /// Columns that together describe a location.
    pub struct GeoSpatialColumnGroup {
        name: one String => "Name" [required, len(1, 64)],
        country_code: one GeoSpatialCountryCode => "CountryCode" [required],
        columns: list String => "Columns" [required, len(1, 16)],
    }
}

union_shape! {
    /// A group of related columns.
    pub enum ColumnGroup {
        GeoSpatialColumnGroup(GeoSpatialColumnGroup) => "GeoSpatialColumnGroup" as geo_spatial_column_group,
    }
}

shape! {
    /// Data set whose rows restrict what each user sees.
    pub struct RowLevelPermissionDataSet {
        namespace: one String => "Namespace" [len(0, 64), pattern("^[a-zA-Z0-9._-]*$")],
        arn: one String => "Arn" [required],
        permission_policy: one RowLevelPermissionPolicy => "PermissionPolicy" [required],
    }
}

shape! {
    /// A column of the data set's final output.
    pub struct OutputColumn {
        name: one String => "Name" [len(1, 128)],
        column_type: one ColumnDataType => "Type",
    }
}

shape! {
    /// A data set as described by the service.
    pub struct DataSet {
        arn: one String => "Arn",
        data_set_id: one String => "DataSetId",
        name: one String => "Name",
        created_time: one Timestamp => "CreatedTime",
        last_updated_time: one Timestamp => "LastUpdatedTime",
        physical_table_map: map PhysicalTable => "PhysicalTableMap",
        logical_table_map: map LogicalTable => "LogicalTableMap",
        output_columns: list OutputColumn => "OutputColumns",
        import_mode: one DataSetImportMode => "ImportMode",
        consumed_spice_capacity_in_bytes: val i64 => "ConsumedSpiceCapacityInBytes",
        column_groups: list ColumnGroup => "ColumnGroups",
        row_level_permission_data_set: one RowLevelPermissionDataSet => "RowLevelPermissionDataSet",
    }
}

shape! {
    pub struct DataSetSummary {
        arn: one String => "Arn",
        data_set_id: one String => "DataSetId",
        name: one String => "Name",
        created_time: one Timestamp => "CreatedTime",
        last_updated_time: one Timestamp => "LastUpdatedTime",
        import_mode: one DataSetImportMode => "ImportMode",
        row_level_permission_data_set: one RowLevelPermissionDataSet => "RowLevelPermissionDataSet",
    }
}

shape! {
    /// Creates a data set.
    pub struct CreateDataSetRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_set_id: one String => "DataSetId" [required],
        name: one String => "Name" [required, len(1, 128)],
        physical_table_map: map PhysicalTable => "PhysicalTableMap" [required, len(1, 16)],
        logical_table_map: map LogicalTable => "LogicalTableMap" [len(1, 32)],
        import_mode: one DataSetImportMode => "ImportMode" [required],
        column_groups: list ColumnGroup => "ColumnGroups" [len(1, 8)],
        permissions: list ResourcePermission => "Permissions" [len(1, 64)],
        row_level_permission_data_set: one RowLevelPermissionDataSet => "RowLevelPermissionDataSet",
        tags: list Tag => "Tags" [len(1, 200)],
    }
}

shape! {
    pub struct CreateDataSetResult {
        arn: one String => "Arn",
        data_set_id: one String => "DataSetId",
        ingestion_arn: one String => "IngestionArn",
        ingestion_id: one String => "IngestionId",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Deletes a data set.
    pub struct DeleteDataSetRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_set_id: one String => "DataSetId" [required],
    }
}

shape! {
    pub struct DeleteDataSetResult {
        arn: one String => "Arn",
        data_set_id: one String => "DataSetId",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Describes a data set.
    pub struct DescribeDataSetRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_set_id: one String => "DataSetId" [required],
    }
}

shape! {
    pub struct DescribeDataSetResult {
        data_set: one DataSet => "DataSet",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Describes the permissions on a data set.
    pub struct DescribeDataSetPermissionsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_set_id: one String => "DataSetId" [required],
    }
}

shape! {
    pub struct DescribeDataSetPermissionsResult {
        data_set_arn: one String => "DataSetArn",
        data_set_id: one String => "DataSetId",
        permissions: list ResourcePermission => "Permissions",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Lists data sets in the current region.
    pub struct ListDataSetsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct ListDataSetsResult {
        data_set_summaries: list DataSetSummary => "DataSetSummaries",
        next_token: one String => "NextToken",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Updates a data set.
    pub struct UpdateDataSetRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_set_id: one String => "DataSetId" [required],
        name: one String => "Name" [required, len(1, 128)],
        physical_table_map: map PhysicalTable => "PhysicalTableMap" [required, len(1, 16)],
        logical_table_map: map LogicalTable => "LogicalTableMap" [len(1, 32)],
        import_mode: one DataSetImportMode => "ImportMode" [required],
        column_groups: list ColumnGroup => "ColumnGroups" [len(1, 8)],
        row_level_permission_data_set: one RowLevelPermissionDataSet => "RowLevelPermissionDataSet",
    }
}

shape! {
    pub struct UpdateDataSetResult {
        arn: one String => "Arn",
        data_set_id: one String => "DataSetId",
        ingestion_arn: one String => "IngestionArn",
        ingestion_id: one String => "IngestionId",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Grants and revokes permissions on a data set.
    pub struct UpdateDataSetPermissionsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_set_id: one String => "DataSetId" [required],
        grant_permissions: list ResourcePermission => "GrantPermissions" [len(1, 64)],
        revoke_permissions: list ResourcePermission => "RevokePermissions" [len(1, 64)],
    }
}

shape! {
    pub struct UpdateDataSetPermissionsResult {
        data_set_arn: one String => "DataSetArn",
        data_set_id: one String => "DataSetId",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}
