pub mod upload_policy;
