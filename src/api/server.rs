use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;

use crate::api::dto::{FlattenParams, RowsDto};
use crate::domain::flatten::unsupported_lines;
use crate::infrastructure::program_from_value;

#[derive(Debug, Deserialize)]
struct CommandReq {
    command: String,
    params: Option<serde_json::Value>,
}

/// Serve JSON-lines requests on `127.0.0.1:port`, one thread per connection.
pub fn start_server(port: u16) -> Result<()> {
    let address = format!("127.0.0.1:{}", port);
    let listener = TcpListener::bind(&address)
        .with_context(|| format!("Failed to bind to {}", address))?;

    tracing::info!(%address, "API server listening");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                thread::spawn(move || {
                    if let Err(e) = handle_connection(stream) {
                        tracing::warn!(error = %e, "connection error");
                    }
                });
            }
            Err(e) => tracing::warn!(error = %e, "accept error"),
        }
    }

    Ok(())
}

fn handle_connection(mut stream: TcpStream) -> Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (response, shutdown) = match process_command(trimmed) {
            Ok(reply) => (
                json!({
                    "status": "success",
                    "data": reply.data
                }),
                reply.shutdown,
            ),
            Err(e) => (
                json!({
                    "status": "error",
                    "message": format!("{:#}", e)
                }),
                false,
            ),
        };

        let response_str = serde_json::to_string(&response)?;
        stream.write_all(response_str.as_bytes())?;
        stream.write_all(b"\n")?;

        if shutdown {
            tracing::info!("shutdown requested");
            std::process::exit(0);
        }
    }
    Ok(())
}

/// Outcome of one request: the `data` payload and whether the server should stop.
#[derive(Debug)]
pub struct Reply {
    pub data: serde_json::Value,
    pub shutdown: bool,
}

impl Reply {
    fn data(data: serde_json::Value) -> Self {
        Self { data, shutdown: false }
    }
}

/// Execute one request line.
pub fn process_command(json_str: &str) -> Result<Reply> {
    let req: CommandReq = serde_json::from_str(json_str).context("Invalid JSON format")?;

    match req.command.as_str() {
        "PING" => Ok(Reply::data(json!("PONG"))),
        "FLATTEN" => handle_flatten(req.params).map(Reply::data),
        "SHUTDOWN" => Ok(Reply {
            data: json!("Shutting down..."),
            shutdown: true,
        }),
        _ => anyhow::bail!("Unknown command: {}", req.command),
    }
}

fn handle_flatten(params: Option<serde_json::Value>) -> Result<serde_json::Value> {
    let params = params.ok_or_else(|| anyhow::anyhow!("Missing params for FLATTEN"))?;
    let params: FlattenParams = serde_json::from_value(params).context("Invalid FLATTEN params")?;

    let program = program_from_value(params.program)?;
    let rows = params.options.flatten(&program.body)?;
    tracing::debug!(rows = rows.len(), "flattened request");

    let dto = RowsDto {
        rows,
        unsupported: unsupported_lines(&program.body),
    };
    Ok(serde_json::to_value(dto)?)
}
