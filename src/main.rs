mod config;
mod server;
mod status;
mod timing;

use std::sync::Arc;

use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use config::Config;
use server::server::Server;
use status::watcher::StatusWatcher;

const CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() {
    let config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(raw) => Config::from_config(raw).unwrap(),
        Err(_) => Config::default(),
    };
    let timezone = config.timezone().unwrap();
    let schedule = Arc::new(config.schedule().unwrap());

    let watcher = StatusWatcher::new(schedule.clone(), timezone);
    let server = Server::setup(schedule.clone(), timezone);

    tokio::spawn(async move {
        watcher.run().await;
    });

    let listener = TcpListener::bind(&config.address).await.unwrap();

    loop {
        let (stream, _) = listener.accept().await.unwrap();
        let io = TokioIo::new(stream);
        let server_clone = server.clone();
        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new()
                .serve_connection(io, server_clone)
                .await
            {
                println!("{}", err);
            }
        });
    }
}
