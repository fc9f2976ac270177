use goose::prelude::*;
use search_loadgen::core::{SearchQuery, SearchSummary};
use search_loadgen::utils::logger;
use std::time::Duration;

/// One simulated user action: issue a randomized product search through the
/// harness-managed client and print the per-request summary line.
async fn search_products(user: &mut GooseUser) -> TransactionResult {
    let query = SearchQuery::draw(&mut rand::thread_rng());
    let mut goose = user.get(&query.request_path()).await?;

    match goose.response {
        Ok(response) => {
            let status = response.status().as_u16();
            if status == 200 {
                let body = match response.text().await {
                    Ok(body) => body,
                    Err(err) => {
                        tracing::warn!("failed to read body for search '{}': {}", query.term(), err);
                        return Ok(());
                    }
                };
                match serde_json::from_str::<SearchSummary>(&body) {
                    Ok(summary) => println!("{}", query.summary_line(&summary)),
                    Err(err) => {
                        tracing::warn!("non-JSON body for search '{}': {}", query.term(), err);
                        return user.set_failure(
                            "search response was not valid JSON",
                            &mut goose.request,
                            None,
                            Some(body.as_str()),
                        );
                    }
                }
            } else {
                println!("{}", query.error_line(status));
            }
        }
        // Transport-level failures are the harness's concern; it has already
        // recorded the request as failed.
        Err(err) => tracing::warn!("request error for search '{}': {}", query.term(), err),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    logger::init_cli_logger(false);

    GooseAttack::initialize()?
        .register_scenario(
            scenario!("ProductSearchUser")
                // Searches go out back to back; throughput is shaped only by
                // the user count and hatch rate given on the command line.
                .set_wait_time(Duration::ZERO, Duration::ZERO)?
                .register_transaction(transaction!(search_products).set_name("product search")),
        )
        .set_default(GooseDefault::Host, "http://localhost:8080")?
        .execute()
        .await?;

    Ok(())
}
