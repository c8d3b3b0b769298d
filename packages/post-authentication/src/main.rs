use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shared::models::cognito::CognitoTriggerEvent;
use shared::telemetry::init_tracing;

mod notifier;
use notifier::PostAuthenticationNotifier;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let notifier = PostAuthenticationNotifier::new();

    run(service_fn(move |event: LambdaEvent<CognitoTriggerEvent>| {
        let notifier = notifier.clone();
        async move { notifier.handle(event.payload).await }
    }))
    .await
}
