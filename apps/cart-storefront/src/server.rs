//! Server-side rendering for Spin/WASI.

use leptos::{
    config::{get_configuration, LeptosOptions},
    prelude::provide_context,
    task::Executor as LeptosExecutor,
};
use leptos_wasi::{
    handler::HandlerError,
    prelude::{IncomingRequest, ResponseOutparam, WasiExecutor},
};
use wasi::exports::http::incoming_handler::Guest;
use wasi::http::proxy::export;

use cart_core::StorefrontConfig;

use crate::app::{shell, App};

struct CartServer;

impl Guest for CartServer {
    fn handle(request: IncomingRequest, response_out: ResponseOutparam) {
        let executor = WasiExecutor::new(leptos_wasi::executor::Mode::Stalled);
        if let Err(e) = LeptosExecutor::init_local_custom_executor(executor.clone()) {
            eprintln!("Executor init error: {e:?}");
            return;
        }
        let leptos_options = match get_configuration(None) {
            Ok(conf) => conf.leptos_options,
            Err(e) => {
                eprintln!("Configuration error: {e:?}");
                return;
            }
        };
        let config = StorefrontConfig::from_env().unwrap_or_else(|e| {
            eprintln!("Storefront config error, using defaults: {e:#}");
            StorefrontConfig::default()
        });
        executor.run_until(async {
            if let Err(e) = handle_request(request, response_out, leptos_options, config).await {
                eprintln!("Request error: {e:?}");
            }
        })
    }
}

async fn handle_request(
    request: IncomingRequest,
    response_out: ResponseOutparam,
    leptos_options: LeptosOptions,
    config: StorefrontConfig,
) -> Result<(), HandlerError> {
    use leptos_wasi::prelude::Handler;

    Handler::build(request, response_out)?
        .generate_routes(App)
        .handle_with_context(
            move || shell(leptos_options.clone()),
            move || provide_context(config.clone()),
        )
        .await?;

    Ok(())
}

export!(CartServer with_types_in wasi);
