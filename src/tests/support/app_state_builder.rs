use crate::tests::support::stubs::*;
use crate::upload::application::domain::policies::upload_policy::UploadPolicy;
use crate::upload::application::ports::incoming::use_cases::UploadFileUseCase;
use crate::user::application::ports::incoming::use_cases::FetchUserUseCase;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    upload_file: Arc<dyn UploadFileUseCase + Send + Sync>,
    fetch_user: Arc<dyn FetchUserUseCase + Send + Sync>,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            upload_file: Arc::new(StubUploadFileUseCase),
            fetch_user: Arc::new(StubFetchUserUseCase),
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_upload_file(
        mut self,
        uc: impl UploadFileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.upload_file = Arc::new(uc);
        self
    }

    pub fn with_fetch_user(mut self, uc: impl FetchUserUseCase + Send + Sync + 'static) -> Self {
        self.fetch_user = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            upload_file_use_case: self.upload_file,
            fetch_user_use_case: self.fetch_user,
            upload_policy: Arc::new(self.upload_policy),
        })
    }
}
