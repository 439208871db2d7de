//! User models.
//!
//! This module contains types for registering, describing, listing, and
//! managing users of a namespace.

use crate::models::enums::{IdentityType, UserRole};
use crate::models::groups::Group;
use crate::shape;

shape! {
    /// A registered user.
    pub struct User {
        arn: one String => "Arn",
        user_name: one String => "UserName" [len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        email: one String => "Email",
        role: one UserRole => "Role",
        identity_type: one IdentityType => "IdentityType",
        active: val bool => "Active",
        principal_id: one String => "PrincipalId",
    }
}

shape! {
    /// Registers a user, either IAM-backed or QuickSight-native.
    pub struct RegisterUserRequest {
        identity_type: one IdentityType => "IdentityType" [required],
        email: one String => "Email" [required],
        user_role: one UserRole => "UserRole" [required],
        iam_arn: one String => "IamArn",
        session_name: one String => "SessionName" [len(2, 64), pattern("[\\w+=.@-]*")],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
        user_name: one String => "UserName" [len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
    }
}

shape! {
    pub struct RegisterUserResult {
        user: one User => "User",
        /// Invitation URL for QuickSight-native users.
        user_invitation_url: one String => "UserInvitationUrl",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Deletes a user by name.
    pub struct DeleteUserRequest {
        user_name: one String => "UserName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct DeleteUserResult {
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Deletes a user by principal id.
    pub struct DeleteUserByPrincipalIdRequest {
        principal_id: one String => "PrincipalId" [required],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct DeleteUserByPrincipalIdResult {
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    pub struct DescribeUserRequest {
        user_name: one String => "UserName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct DescribeUserResult {
        user: one User => "User",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    pub struct ListUsersRequest {
        aws_account_id: one String => "AwsAccountId" [account_id],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
        namespace: one String => "Namespace" [namespace],
    }
}

shape! {
    pub struct ListUsersResult {
        user_list: list User => "UserList",
        next_token: one String => "NextToken",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Lists the groups a user belongs to.
    pub struct ListUserGroupsRequest {
        user_name: one String => "UserName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
        next_token: one String => "NextToken",
        max_results: val i32 => "MaxResults" [range(1, 100)],
    }
}

shape! {
    pub struct ListUserGroupsResult {
        group_list: list Group => "GroupList",
        next_token: one String => "NextToken",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Changes a user's email or role.
    pub struct UpdateUserRequest {
        user_name: one String => "UserName" [required, len(1, 1024), pattern("[\\u{0020}-\\u{00FF}]+")],
        aws_account_id: one String => "AwsAccountId" [account_id],
        namespace: one String => "Namespace" [namespace],
        email: one String => "Email" [required],
        role: one UserRole => "Role" [required],
    }
}

shape! {
    pub struct UpdateUserResult {
        user: one User => "User",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}
