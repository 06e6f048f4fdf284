#[cfg(feature = "lambda")]
use eth_balance::config::lambda::LambdaConfig;
#[cfg(feature = "lambda")]
use eth_balance::core::{BalanceSource, ConfigProvider, HandlerResult};
#[cfg(feature = "lambda")]
use eth_balance::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use eth_balance::{BalanceHandler, EtherscanClient};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "lambda")]
use std::collections::HashMap;

/// API Gateway proxy integration request, reduced to the fields used here.
#[cfg(feature = "lambda")]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[cfg(feature = "lambda")]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Base64 bodies are not decoded; they count as an absent body.
#[cfg(feature = "lambda")]
fn request_body(request: Request) -> Vec<u8> {
    if request.is_base64_encoded {
        tracing::warn!("Base64-encoded body is not supported");
        return Vec::new();
    }
    request.body.unwrap_or_default().into_bytes()
}

#[cfg(feature = "lambda")]
fn to_response(result: HandlerResult) -> Result<Response, serde_json::Error> {
    Ok(Response {
        status_code: result.status,
        headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
        body: serde_json::to_string(&result.body)?,
    })
}

#[cfg(feature = "lambda")]
async fn function_handler<S: BalanceSource, C: ConfigProvider>(
    handler: &BalanceHandler<S, C>,
    event: LambdaEvent<Request>,
) -> Result<Response, Error> {
    tracing::debug!("Handling balance request {}", event.context.request_id);

    let body = request_body(event.payload);
    let result = handler.handle_bytes(&body).await;
    Ok(to_response(result)?)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let client = EtherscanClient::from_config(&config)?;
    let handler = BalanceHandler::new(client, config);
    let handler = &handler;

    tracing::info!("Starting eth-balance Lambda function");
    run(service_fn(move |event: LambdaEvent<Request>| async move {
        function_handler(handler, event).await
    }))
    .await
}
