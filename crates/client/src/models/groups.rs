//! Group and group membership models.

use crate::shape;

shape! {
    /// A group of users.
    pub struct Group {
        arn: one String => "Arn",
        group_name: one String => "GroupName" [len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        description: one String => "Description" [len(1, 512)],
        principal_id: one String => "PrincipalId",
    }
}

shape! {
    /// A user's membership in a group.
    pub struct GroupMember {
        arn: one String => "Arn",
        member_name: one String => "MemberName" [len(1, 256), pattern("[\\u{0020}-\\u{00FF}]+")],
    }
}

shape! {
    pub struct CreateGroupRequest {
        group_name: one String => "GroupName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        description: one String => "Description" [len(1, 512)],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct CreateGroupResult {
        group: one Group => "Group",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Adds a user to a group.
    pub struct CreateGroupMembershipRequest {
        member_name: one String => "MemberName" [required, len(1, 256), pattern("[\\u{0020}-\\u{00FF}]+")],
        group_name: one String => "GroupName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct CreateGroupMembershipResult {
        group_member: one GroupMember => "GroupMember",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    pub struct DeleteGroupRequest {
        group_name: one String => "GroupName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct DeleteGroupResult {
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Removes a user from a group.
    pub struct DeleteGroupMembershipRequest {
        member_name: one String => "MemberName" [required, len(1, 256), pattern("[\\u{0020}-\\u{00FF}]+")],
        group_name: one String => "GroupName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct DeleteGroupMembershipResult {
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    pub struct DescribeGroupRequest {
        group_name: one String => "GroupName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct DescribeGroupResult {
        group: one Group => "Group",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    pub struct ListGroupMembershipsRequest {
        group_name: one String => "GroupName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct ListGroupMembershipsResult {
        group_member_list: list GroupMember => "GroupMemberList",
        next_token: one String => "NextToken",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    pub struct ListGroupsRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct ListGroupsResult {
        group_list: list Group => "GroupList",
        next_token: one String => "NextToken",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Changes a group's description.
    pub struct UpdateGroupRequest {
        group_name: one String => "GroupName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        description: one String => "Description" [len(1, 512)],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct UpdateGroupResult {
        group: one Group => "Group",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Validate, ValidationPolicy, ViolationKind};

    #[test]
    fn test_namespace_pattern() {
        let request = CreateGroupRequest::default()
            .with_group_name("analysts")
            .with_aws_account_id("111122223333")
            .with_namespace("bad namespace");
        let report = request.validate(&ValidationPolicy::default());
        assert!(matches!(report.at("Namespace")[..], [ViolationKind::Pattern { .. }]));
    }

    #[test]
    fn test_list_result_display() {
        let result = ListGroupsResult::default()
            .with_group_list([Group::default().with_group_name("a"), Group::default().with_group_name("b")])
            .with_status(200);
        assert_eq!(
            result.to_string(),
            "{GroupList: [{GroupName: a}, {GroupName: b}], Status: 200}"
        );
    }
}
