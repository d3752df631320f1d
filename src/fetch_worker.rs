use crate::api::QuizApi;
use crate::logger;
use crate::models::{FetchRequest, FetchResponse};
use crate::selection::{gather_candidates, pick};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Spawn the thread that owns all network I/O. Requests arrive over `rx`
/// and are served one at a time: per-category fetches run sequentially, so
/// total latency is additive in the number of selected categories. Replies
/// go back over `tx` in completion order; the UI applies each as it drains,
/// so a reply from a superseded request is simply overwritten by the later
/// one.
pub fn spawn_fetch_worker(
    tx: Sender<FetchResponse>,
    rx: Receiver<FetchRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("quiztrepreneur::fetch_worker".to_string())
        .spawn(move || {
            let api = QuizApi::from_env();
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("Failed to start fetch runtime: {}", e));
                    return;
                }
            };
            loop {
                match rx.recv() {
                    Ok(FetchRequest::Categories) => {
                        let categories = rt.block_on(api.fetch_categories());
                        logger::log(&format!("Fetched {} categories", categories.len()));
                        let _ = tx.send(FetchResponse::Categories(categories));
                    }
                    Ok(FetchRequest::Practice {
                        categories,
                        difficulty,
                    }) => {
                        let candidates =
                            rt.block_on(gather_candidates(&api, &categories, difficulty));
                        logger::log(&format!(
                            "Practice request over {} categories produced {} candidates",
                            categories.len(),
                            candidates.len()
                        ));
                        let question = pick(&candidates, &mut rand::thread_rng());
                        let _ = tx.send(FetchResponse::Practice(question));
                    }
                    Err(_) => {
                        // Channel disconnected, exit worker
                        logger::log("Fetch worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("Failed to spawn fetch worker thread")
}
