use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;
use tracing::info;

mod processor;
use processor::PostConfirmationProcessor;
use shared::{
    config::StoreConfig, models::cognito::CognitoTriggerEvent,
    repositories::user_repository::DynamoDbUserRepository, services::user_service::UserService,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    // Built once per execution environment and reused by every invocation.
    let store_config = StoreConfig::from_env();
    let config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&config);

    info!(table = %store_config.table_name, "Post confirmation trigger starting");

    let user_repository = Arc::new(DynamoDbUserRepository::new(
        client,
        store_config.table_name,
    ));
    let user_service = UserService::new(user_repository);
    let processor = PostConfirmationProcessor::new(user_service);

    run(service_fn(move |event: LambdaEvent<CognitoTriggerEvent>| {
        let processor = processor.clone();
        async move { processor.handle(event.payload).await }
    }))
    .await
}
