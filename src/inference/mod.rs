// src/inference/mod.rs

//! Forwards an artifact and a question to a hosted chat model.
//!
//! The answer arrives as a lazy, finite, non-restartable sequence of text
//! chunks ([`ChunkStream`]). Callers concatenate chunks in arrival order;
//! stopping early is done by dropping the stream.

#[cfg(feature = "inference")]
mod groq;
pub mod models;

#[cfg(feature = "inference")]
pub use groq::{GroqClient, GROQ_BASE_URL};

use crate::cancellation::CancellationToken;
use crate::constants::DEFAULT_SYSTEM_PROMPT;
use crate::errors::{Error, Result};
use crossbeam_channel::{bounded, RecvTimeoutError};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// Everything one question needs; no session state is kept between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub model: String,
    pub system_prompt: String,
    pub artifact: String,
    pub question: String,
}

impl ChatRequest {
    /// A request with the default model and system prompt.
    pub fn new<A: Into<String>, Q: Into<String>>(artifact: A, question: Q) -> Self {
        Self {
            model: models::DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            artifact: artifact.into(),
            question: question.into(),
        }
    }

    /// The system and user messages sent to the provider.
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: self.system_prompt.clone(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: build_user_message(&self.artifact, &self.question),
            },
        ]
    }
}

/// One chat message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Embeds the artifact in a fenced block followed by the question.
///
/// # Examples
/// ```
/// use aidigest::inference::build_user_message;
///
/// assert_eq!(
///     build_user_message("# a.rs", "What does this do?"),
///     "```\n# a.rs\n```\nAnswer the user's question about the code above: \nWhat does this do?"
/// );
/// ```
pub fn build_user_message(artifact: &str, question: &str) -> String {
    format!(
        "```\n{}\n```\nAnswer the user's question about the code above: \n{}",
        artifact, question
    )
}

/// A chat model that streams its answer.
pub trait InferenceProvider {
    /// Starts a completion and returns the chunk stream.
    ///
    /// # Errors
    /// Returns `Error::Inference` if the request cannot be sent or the
    /// provider rejects it.
    fn stream(&self, request: &ChatRequest) -> Result<ChunkStream>;
}

#[derive(Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    #[serde(default)]
    error: Option<StreamError>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Deserialize, Default)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct StreamError {
    message: String,
}

/// Text chunks parsed from a server-sent event body.
///
/// Reads `data: {json}` lines and yields each non-empty
/// `choices[0].delta.content`. Ends at `data: [DONE]` or end of input. After
/// an error the stream is exhausted.
///
/// # Examples
/// ```
/// use aidigest::inference::ChunkStream;
///
/// let body = "data: {\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n\n\
///             data: {\"choices\":[{\"delta\":{\"content\":\"lo\"}}]}\n\n\
///             data: [DONE]\n\n";
/// let chunks: Vec<String> = ChunkStream::from_reader(body.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(chunks, ["Hel", "lo"]);
/// ```
pub struct ChunkStream {
    reader: Box<dyn BufRead + Send>,
    done: bool,
}

impl ChunkStream {
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(reader),
            done: false,
        }
    }

    fn fail(&mut self, message: String) -> Option<Result<String>> {
        self.done = true;
        Some(Err(Error::Inference(message)))
    }
}

impl Iterator for ChunkStream {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {}
                Err(e) => return self.fail(format!("failed to read answer stream: {}", e)),
            }

            let Some(data) = line.trim_end().strip_prefix("data:") else {
                continue;
            };
            let data = data.trim_start();
            if data == "[DONE]" {
                log::trace!("Answer stream completed with [DONE] marker");
                self.done = true;
                return None;
            }

            let chunk: StreamChunk = match serde_json::from_str(data) {
                Ok(chunk) => chunk,
                Err(e) => return self.fail(format!("malformed stream chunk: {}", e)),
            };
            if let Some(error) = chunk.error {
                return self.fail(error.message);
            }
            let content = chunk
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta.content);
            if let Some(content) = content.filter(|c| !c.is_empty()) {
                return Some(Ok(content));
            }
        }
    }
}

/// Concatenates every chunk in arrival order and trims the result.
pub fn collect_answer(stream: ChunkStream) -> Result<String> {
    let mut answer = String::new();
    for chunk in stream {
        answer.push_str(&chunk?);
    }
    Ok(answer.trim().to_string())
}

/// How often [`stream_to_writer`] checks its token while no chunk arrives.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Writes chunks to `writer` as they arrive until the stream ends or `token`
/// is cancelled.
///
/// The stream is read on a worker thread, so cancellation is noticed within
/// [`CANCEL_POLL_INTERVAL`] even while the provider sends nothing. A
/// cancelled worker is left blocked on its read and exits with the process.
///
/// Returns the number of chunks written, or `Error::Interrupted` when
/// cancelled.
pub fn stream_to_writer(
    stream: ChunkStream,
    writer: &mut dyn Write,
    token: &CancellationToken,
) -> Result<usize> {
    let (tx, rx) = bounded::<Result<String>>(16);
    thread::spawn(move || {
        for chunk in stream {
            if tx.send(chunk).is_err() {
                break;
            }
        }
    });

    let mut written = 0;
    loop {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        let chunk = match rx.recv_timeout(CANCEL_POLL_INTERVAL) {
            Ok(chunk) => chunk?,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        writer
            .write_all(chunk.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| Error::Inference(format!("failed to write answer: {}", e)))?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sse(contents: &[&str]) -> String {
        let mut body = String::new();
        for content in contents {
            body.push_str(&format!(
                "data: {}\n\n",
                serde_json::json!({"choices": [{"delta": {"content": content}}]})
            ));
        }
        body.push_str("data: [DONE]\n\n");
        body
    }

    #[test]
    fn test_request_messages() {
        let mut request = ChatRequest::new("ARTIFACT", "Why?");
        request.system_prompt = "Be brief.".to_string();
        let messages = request.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, "Be brief.");
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.starts_with("```\nARTIFACT\n```\n"));
        assert!(messages[1].content.ends_with("\nWhy?"));
    }

    #[test]
    fn test_request_defaults() {
        let request = ChatRequest::new("a", "q");
        assert_eq!(request.model, models::DEFAULT_MODEL);
        assert_eq!(request.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn test_stream_skips_empty_and_role_only_deltas() {
        let body = "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\n\
                    : keep-alive comment\n\n\
                    data: {\"choices\":[{\"delta\":{\"content\":\"\"}}]}\n\n\
                    data: {\"choices\":[{\"delta\":{\"content\":\"ok\"}}]}\n\n\
                    data: {\"choices\":[{\"delta\":{},\"finish_reason\":\"stop\"}]}\n\n\
                    data: [DONE]\n\n";
        let chunks: Vec<String> = ChunkStream::from_reader(body.as_bytes())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(chunks, ["ok"]);
    }

    #[test]
    fn test_stream_stops_at_done() {
        let body = format!("{}data: {{\"choices\":[{{\"delta\":{{\"content\":\"late\"}}}}]}}\n", sse(&["a"]));
        let chunks: Vec<String> = ChunkStream::from_reader(std::io::Cursor::new(body))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(chunks, ["a"]);
    }

    #[test]
    fn test_stream_without_done_ends_at_eof() {
        let body = "data: {\"choices\":[{\"delta\":{\"content\":\"x\"}}]}\n";
        let chunks: Vec<String> = ChunkStream::from_reader(body.as_bytes())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(chunks, ["x"]);
    }

    #[test]
    fn test_malformed_chunk_is_error_and_exhausts() {
        let mut stream = ChunkStream::from_reader("data: {not json}\ndata: [DONE]\n".as_bytes());
        assert!(matches!(stream.next(), Some(Err(Error::Inference(_)))));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_error_event_is_surfaced() {
        let body = "data: {\"error\":{\"message\":\"rate limit exceeded\"}}\n";
        let mut stream = ChunkStream::from_reader(body.as_bytes());
        match stream.next() {
            Some(Err(Error::Inference(msg))) => assert_eq!(msg, "rate limit exceeded"),
            _ => panic!("expected an inference error"),
        }
    }

    #[test]
    fn test_collect_answer_concatenates_and_trims() {
        let stream = ChunkStream::from_reader(std::io::Cursor::new(sse(&["  The ", "answer", " is 42.\n"])));
        assert_eq!(collect_answer(stream).unwrap(), "The answer is 42.");
    }

    #[test]
    fn test_stream_to_writer() {
        let stream = ChunkStream::from_reader(std::io::Cursor::new(sse(&["a", "b", "c"])));
        let mut out = Vec::new();
        let written = stream_to_writer(stream, &mut out, &CancellationToken::new()).unwrap();
        assert_eq!(written, 3);
        assert_eq!(out, b"abc");
    }

    /// A reader that never produces data within the test's lifetime.
    struct Silent;

    impl std::io::Read for Silent {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            thread::sleep(Duration::from_secs(60));
            Ok(0)
        }
    }

    #[test]
    fn test_stream_to_writer_cancels_while_provider_is_silent() {
        use std::io::Read;
        let first = std::io::Cursor::new(sse(&["a"]).replace("data: [DONE]\n\n", ""));
        let reader = std::io::BufReader::new(first.chain(Silent));
        let stream = ChunkStream::from_reader(reader);

        let token = CancellationToken::new();
        let canceller = token.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(300));
            canceller.cancel();
        });

        let started = std::time::Instant::now();
        let mut out = Vec::new();
        let result = stream_to_writer(stream, &mut out, &token);
        assert!(matches!(result, Err(Error::Interrupted)));
        assert_eq!(out, b"a");
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn test_stream_to_writer_stops_when_cancelled() {
        let stream = ChunkStream::from_reader(std::io::Cursor::new(sse(&["a", "b"])));
        let token = CancellationToken::new();
        token.cancel();
        let mut out = Vec::new();
        let result = stream_to_writer(stream, &mut out, &token);
        assert!(matches!(result, Err(Error::Interrupted)));
        assert!(out.is_empty());
    }
}
