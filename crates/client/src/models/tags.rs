//! Resource tagging models.

use crate::models::common::Tag;
use crate::shape;

shape! {
    pub struct ListTagsForResourceRequest {
        resource_arn: one String => "ResourceArn" [required],
    }
}

shape! {
    pub struct ListTagsForResourceResult {
        tags: list Tag => "Tags",
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Adds or overwrites tags on a resource.
    pub struct TagResourceRequest {
        resource_arn: one String => "ResourceArn" [required],
        tags: list Tag => "Tags" [required, len(1, 200)],
    }
}

shape! {
    pub struct TagResourceResult {
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}

shape! {
    /// Removes tags from a resource by key.
    pub struct UntagResourceRequest {
        resource_arn: one String => "ResourceArn" [required],
        tag_keys: list String => "TagKeys" [required, len(1, 200)],
    }
}

shape! {
    pub struct UntagResourceResult {
        request_id: one String => "RequestId",
        status: val i32 => "Status",
    }
}
