use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::thread;
use std::time::Duration;

use rowtrace::api::dto::RowsDto;
use rowtrace::api::server;
use rowtrace::RowType;

fn send(stream: &mut TcpStream, reader: &mut BufReader<TcpStream>, request: &str) -> serde_json::Value {
    stream.write_all(request.as_bytes()).unwrap();
    stream.write_all(b"\n").unwrap();
    let mut response = String::new();
    reader.read_line(&mut response).unwrap();
    serde_json::from_str(&response).unwrap()
}

#[test]
fn test_api_server_round_trip() {
    // 1. Start server in background thread
    let port = 4617;
    thread::spawn(move || {
        if let Err(e) = server::start_server(port) {
            eprintln!("Server failed: {}", e);
        }
    });
    thread::sleep(Duration::from_millis(500));

    // 2. Connect client
    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port)).expect("Failed to connect to server");
    let mut reader = BufReader::new(stream.try_clone().unwrap());

    // 3. PING
    let response = send(&mut stream, &mut reader, r#"{"command": "PING"}"#);
    assert_eq!(response["status"], "success");
    assert_eq!(response["data"], "PONG");

    // 4. FLATTEN `if (x) {} else { y = 5 }`
    let request = r#"{"command": "FLATTEN", "params": {"program": {"type": "Program", "body": [{
        "type": "IfStatement", "loc": {"start": {"line": 1, "column": 0}},
        "test": {"type": "Identifier", "name": "x", "loc": {"start": {"line": 1, "column": 3}}},
        "consequent": {"type": "BlockStatement", "body": [], "loc": {"start": {"line": 1, "column": 6}}},
        "alternate": {"type": "BlockStatement", "loc": {"start": {"line": 2, "column": 0}}, "body": [{
            "type": "ExpressionStatement", "loc": {"start": {"line": 2, "column": 2}},
            "expression": {"type": "AssignmentExpression", "operator": "=",
                "left": {"type": "Identifier", "name": "y"},
                "right": {"type": "Literal", "value": 5, "raw": "5"}}
        }]}
    }]}}}"#
        .replace('\n', " ");
    let response = send(&mut stream, &mut reader, &request);
    assert_eq!(response["status"], "success", "response: {}", response);
    let dto: RowsDto = serde_json::from_value(response["data"].clone()).unwrap();
    let types: Vec<RowType> = dto.rows.iter().map(|r| r.row_type).collect();
    assert_eq!(
        types,
        vec![RowType::IfStatement, RowType::ElseStatement, RowType::AssignmentExpression]
    );
    assert_eq!(dto.rows[2].value, "5");
    assert!(dto.unsupported.is_empty());

    // 5. Malformed params come back as an error, connection stays usable
    let response = send(&mut stream, &mut reader, r#"{"command": "FLATTEN", "params": {"program": 3}}"#);
    assert_eq!(response["status"], "error");
    let response = send(&mut stream, &mut reader, r#"{"command": "PING"}"#);
    assert_eq!(response["data"], "PONG");

    // SHUTDOWN exits the whole process, so it is not sent from the test harness.
}
