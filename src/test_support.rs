//! Test doubles shared by the unit tests.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

use crate::ui::{page::CounterTone, render::ResultDisplay, Page};

/// A listener that answers exactly one HTTP request with a canned response.
pub struct OneShotServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    /// Raw text of the request the server received.
    pub async fn request(self) -> String {
        self.handle.await.expect("one-shot server task panicked")
    }
}

pub async fn serve_once(status: &'static str, body: &'static str) -> OneShotServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });
    OneShotServer {
        base_url: format!("http://{addr}"),
        handle,
    }
}

/// Base URL of a port nothing listens on.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let body_len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Counter(String, CounterTone),
    Loading(bool),
    SubmitEnabled(bool),
    Results(ResultDisplay),
}

/// Page double that records every element update in order.
#[derive(Default)]
pub struct RecordingPage {
    events: Mutex<Vec<PageEvent>>,
}

impl RecordingPage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.lock().clone()
    }

    pub fn results(&self) -> Vec<ResultDisplay> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                PageEvent::Results(display) => Some(display.clone()),
                _ => None,
            })
            .collect()
    }

    /// Last value written to the overlay, `false` if never touched.
    pub fn loading(&self) -> bool {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|event| match event {
                PageEvent::Loading(active) => Some(*active),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn submit_enabled(&self) -> bool {
        self.events
            .lock()
            .iter()
            .rev()
            .find_map(|event| match event {
                PageEvent::SubmitEnabled(enabled) => Some(*enabled),
                _ => None,
            })
            .unwrap_or(true)
    }
}

impl Page for RecordingPage {
    fn set_counter(&self, text: &str, tone: CounterTone) {
        self.events
            .lock()
            .push(PageEvent::Counter(text.to_string(), tone));
    }

    fn set_loading(&self, active: bool) {
        self.events.lock().push(PageEvent::Loading(active));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.events.lock().push(PageEvent::SubmitEnabled(enabled));
    }

    fn show_results(&self, display: &ResultDisplay) {
        self.events.lock().push(PageEvent::Results(display.clone()));
    }
}
