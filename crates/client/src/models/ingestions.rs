//! SPICE ingestion models.

use uuid::Uuid;

use crate::models::enums::{
    IngestionErrorType, IngestionRequestSource, IngestionRequestType, IngestionStatus,
};
use crate::shape;
use crate::types::Timestamp;

shape! {
    /// Why an ingestion failed.
    pub struct ErrorInfo {
        error_type: one IngestionErrorType => "Type",
        message: one String => "Message",
    }
}

shape! {
    pub struct RowInfo {
        rows_ingested: val i64 => "RowsIngested",
        rows_dropped: val i64 => "RowsDropped",
    }
}

shape! {
    /// Ingestions this one is queued behind.
    pub struct QueueInfo {
        waiting_on_ingestion: one String => "WaitingOnIngestion" [required],
        queued_ingestion: one String => "QueuedIngestion" [required],
    }
}

shape! {
    /// An ingestion as described by the service.
    pub struct Ingestion {
        arn: one String => "Arn" [required],
        ingestion_id: one String => "IngestionId" [len(1, 128), pattern("^[a-zA-Z0-9_-]+$")],
        ingestion_status: one IngestionStatus => "IngestionStatus" [required],
        error_info: one ErrorInfo => "ErrorInfo",
        row_info: one RowInfo => "RowInfo",
        queue_info: one QueueInfo => "QueueInfo",
        created_time: one Timestamp => "CreatedTime" [required],
        ingestion_time_in_seconds: val i64 => "IngestionTimeInSeconds",
        ingestion_size_in_bytes: val i64 => "IngestionSizeInBytes",
        request_source: one IngestionRequestSource => "RequestSource",
        request_type: one IngestionRequestType => "RequestType",
    }
}

impl Ingestion {
    /// Whether the ingestion has stopped, successfully or not.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.ingestion_status(),
            Some(IngestionStatus::Completed | IngestionStatus::Failed | IngestionStatus::Cancelled)
        )
    }
}

shape! {
    /// Cancels an ongoing ingestion.
    pub struct CancelIngestionRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_set_id: one String => "DataSetId" [required],
        ingestion_id: one String => "IngestionId" [required, len(1, 128), pattern("^[a-zA-Z0-9_-]+$")],
    }
}

shape! {
    pub struct CancelIngestionResult {
        arn: one String => "Arn",
        ingestion_id: one String => "IngestionId",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Starts an ingestion into a SPICE data set.
    pub struct CreateIngestionRequest {
        data_set_id: one String => "DataSetId" [required],
        ingestion_id: one String => "IngestionId" [required, len(1, 128), pattern("^[a-zA-Z0-9_-]+$")],
        aws_account_id: one String => "AwsAccountId" [account_id],
    }
}

impl CreateIngestionRequest {
    /// Set a freshly generated ingestion id.
    pub fn with_generated_ingestion_id(self) -> Self {
        self.with_ingestion_id(Uuid::new_v4().to_string())
    }
}

shape! {
    pub struct CreateIngestionResult {
        arn: one String => "Arn",
        ingestion_id: one String => "IngestionId",
        ingestion_status: one IngestionStatus => "IngestionStatus",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Describes an ingestion.
    pub struct DescribeIngestionRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        data_set_id: one String => "DataSetId" [required],
        ingestion_id: one String => "IngestionId" [required, len(1, 128), pattern("^[a-zA-Z0-9_-]+$")],
    }
}

shape! {
    pub struct DescribeIngestionResult {
        ingestion: one Ingestion => "Ingestion",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Lists the ingestions of a data set.
    pub struct ListIngestionsRequest {
        data_set_id: one String => "DataSetId" [required],
        next_token: one String => "NextToken",
        aws_account_id: one String => "AwsAccountId" [account_id],
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct ListIngestionsResult {
        ingestions: list Ingestion => "Ingestions",
        next_token: one String => "NextToken",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Validate, ValidationPolicy};

    #[test]
    fn test_generated_ingestion_id_passes_pattern() {
        let request = CreateIngestionRequest::default()
            .with_aws_account_id("111122223333")
            .with_data_set_id("ds")
            .with_generated_ingestion_id();
        assert_eq!(request.ingestion_id().map(String::len), Some(36));
        assert!(request.validate(&ValidationPolicy::default()).is_valid());
    }

    #[test]
    fn test_generated_ids_differ() {
        let a = CreateIngestionRequest::default().with_generated_ingestion_id();
        let b = CreateIngestionRequest::default().with_generated_ingestion_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_finished() {
        let running = Ingestion::default().with_ingestion_status(IngestionStatus::Running);
        assert!(!running.is_finished());
        let failed = Ingestion::default().with_ingestion_status("FAILED");
        assert!(failed.is_finished());
    }

    #[test]
    fn test_result_tolerates_unknown_fields_and_partial_data() {
        let result: DescribeIngestionResult = serde_json::from_value(serde_json::json!({
            "Ingestion": {
                "Arn": "arn:aws:quicksight:us-east-1:111122223333:dataset/ds/ingestion/i1",
                "IngestionStatus": "COMPLETED",
                "CreatedTime": 1577836800,
                "SomethingNew": true
            },
            "Status": 200
        }))
        .unwrap();
        assert_eq!(result.status(), Some(200));
        assert!(result.ingestion().is_some_and(Ingestion::is_finished));
        assert_eq!(result.request_id(), None);
    }
}
