//! IAM policy assignment models.
//!
//! An assignment attaches an IAM policy to a set of users and groups,
//! keyed by identity kind (`user`, `group`).

use crate::models::enums::AssignmentStatus;
use crate::shape;

shape! {
    /// A full policy assignment.
    pub struct IamPolicyAssignment {
        aws_account_id: one String => "AwsAccountId",
        assignment_id: one String => "AssignmentId",
        assignment_name: one String => "AssignmentName" [pattern("^[0-9a-zA-Z_.:=+@-]{2,256}$")],
        policy_arn: one String => "PolicyArn",
        /// Identities by kind, e.g. `user` to a list of user names.
        identities: map Vec<String> => "Identities",
        assignment_status: one AssignmentStatus => "AssignmentStatus",
    }
}

shape! {
    pub struct IamPolicyAssignmentSummary {
        assignment_name: one String => "AssignmentName",
        assignment_status: one AssignmentStatus => "AssignmentStatus",
    }
}

shape! {
    /// An assignment in effect for a user.
    pub struct ActiveIamPolicyAssignment {
        assignment_name: one String => "AssignmentName",
        policy_arn: one String => "PolicyArn",
    }
}

shape! {
    pub struct CreateIamPolicyAssignmentRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        assignment_name: one String => "AssignmentName" [required, pattern("^[0-9a-zA-Z_.:=+@-]{2,256}$")],
        assignment_status: one AssignmentStatus => "AssignmentStatus" [required],
        policy_arn: one String => "PolicyArn",
        identities: map Vec<String> => "Identities",
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct CreateIamPolicyAssignmentResult {
        assignment_name: one String => "AssignmentName",
        assignment_id: one String => "AssignmentId",
        assignment_status: one AssignmentStatus => "AssignmentStatus",
        policy_arn: one String => "PolicyArn",
        identities: map Vec<String> => "Identities",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    pub struct DeleteIamPolicyAssignmentRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        assignment_name: one String => "AssignmentName" [required, pattern("^[0-9a-zA-Z_.:=+@-]{2,256}$")],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct DeleteIamPolicyAssignmentResult {
        assignment_name: one String => "AssignmentName",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    pub struct DescribeIamPolicyAssignmentRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        assignment_name: one String => "AssignmentName" [required, pattern("^[0-9a-zA-Z_.:=+@-]{2,256}$")],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct DescribeIamPolicyAssignmentResult {
        iam_policy_assignment: one IamPolicyAssignment => "IAMPolicyAssignment",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Lists assignments, optionally filtered by status.
    pub struct ListIamPolicyAssignmentsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        assignment_status: one AssignmentStatus => "AssignmentStatus",
        namespace: one String => "Namespace" [namespace],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct ListIamPolicyAssignmentsResult {
        iam_policy_assignments: list IamPolicyAssignmentSummary => "IAMPolicyAssignments",
        next_token: one String => "NextToken",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Lists the assignments that apply to one user.
    pub struct ListIamPolicyAssignmentsForUserRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        user_name: one String => "UserName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct ListIamPolicyAssignmentsForUserResult {
        active_assignments: list ActiveIamPolicyAssignment => "ActiveAssignments",
        request_id: one String => "RequestId",
        next_token: one String => "NextToken",
        status: val i32 => "Status",
    }
}

shape! {
    pub struct UpdateIamPolicyAssignmentRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        assignment_name: one String => "AssignmentName" [required, pattern("^[0-9a-zA-Z_.:=+@-]{2,256}$")],
        namespace: one String => "Namespace" [namespace],
        assignment_status: one AssignmentStatus => "AssignmentStatus",
        policy_arn: one String => "PolicyArn",
        identities: map Vec<String> => "Identities",
    }
}

shape! {
    pub struct UpdateIamPolicyAssignmentResult {
        assignment_name: one String => "AssignmentName",
        assignment_id: one String => "AssignmentId",
        policy_arn: one String => "PolicyArn",
        identities: map Vec<String> => "Identities",
        assignment_status: one AssignmentStatus => "AssignmentStatus",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::validation::{Validate, ValidationPolicy, ViolationKind};

    fn create() -> CreateIamPolicyAssignmentRequest {
        CreateIamPolicyAssignmentRequest::default()
            .with_aws_account_id("111122223333")
            .with_assignment_name("analysts-read")
            .with_assignment_status(AssignmentStatus::Enabled)
            .with_policy_arn("arn:aws:iam::aws:policy/AmazonAthenaFullAccess")
            .with_namespace("default")
    }

    #[test]
    fn test_identities_reject_duplicate_kind() {
        let request = create()
            .add_identities_entry("user", vec!["alice".to_string()])
            .unwrap();
        let err = request
            .add_identities_entry("user", vec!["bob".to_string()])
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateKey { field: "Identities", .. }));
    }

    #[test]
    fn test_identities_serialize_as_nested_lists() {
        let request = create()
            .add_identities_entry("group", vec!["bi".to_string()])
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Identities"], serde_json::json!({"group": ["bi"]}));
        assert!(request.validate(&ValidationPolicy::default()).is_valid());
    }

    #[test]
    fn test_assignment_name_pattern() {
        let report = create()
            .with_assignment_name("has space")
            .validate(&ValidationPolicy::default());
        assert!(matches!(report.at("AssignmentName")[..], [ViolationKind::Pattern { .. }]));
    }

    #[test]
    fn test_describe_result_uses_upper_case_wire_name() {
        let result: DescribeIamPolicyAssignmentResult = serde_json::from_value(serde_json::json!({
            "IAMPolicyAssignment": {"AssignmentName": "a1", "AssignmentStatus": "DRAFT"},
            "Status": 200
        }))
        .unwrap();
        assert_eq!(
            result
                .iam_policy_assignment()
                .and_then(IamPolicyAssignment::assignment_status),
            Some(&AssignmentStatus::Draft)
        );
    }
}
