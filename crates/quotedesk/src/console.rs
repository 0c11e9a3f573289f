//! Interactive console for the sheet assistant.
//!
//! Each line is one turn. `/image <path> [instruction]` attaches a local
//! image; `exit`, `quit` or `salir` ends the session.

use quotedesk_actions::{SheetAssistant, TurnResult};
use quotedesk_core::{Input, MediaSource};
use quotedesk_error::{ExtractorError, ExtractorErrorKind, QuotedeskErrorKind, QuotedeskResult};
use quotedesk_interface::{IntentExtractor, RowStore};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Words that end the session, compared ignoring case.
pub const EXIT_KEYWORDS: [&str; 3] = ["exit", "quit", "salir"];

/// Instruction used when `/image` is given without one.
pub const DEFAULT_IMAGE_INSTRUCTION: &str =
    "Read this quote and add or update the matching row in the sheet.";

const PROMPT: &str = "\nInstruction (/image <path> [instruction], or 'exit'): ";

const HEADER_TIP: &str = "Tip: check that the sheet headers match the configured columns.";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// End the session
    Exit,
    /// Blank line, nothing to do
    Empty,
    /// Text-only instruction
    Text(String),
    /// Instruction with an attached image
    Image {
        /// Local image file
        path: PathBuf,
        /// Instruction sent with the image
        instruction: String,
    },
    /// `/image` without a path
    Usage(String),
}

impl ConsoleCommand {
    /// Parses one input line.
    ///
    /// The image path may be wrapped in double quotes to allow spaces.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if EXIT_KEYWORDS
            .iter()
            .any(|keyword| line.eq_ignore_ascii_case(keyword))
        {
            return Self::Exit;
        }

        let Some(rest) = line.strip_prefix("/image") else {
            return Self::Text(line.to_string());
        };
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return Self::Text(line.to_string());
        }

        let rest = rest.trim_start();
        let (path, instruction) = match rest.strip_prefix('"') {
            Some(quoted) => match quoted.split_once('"') {
                Some((path, instruction)) => (path, instruction),
                None => (quoted, ""),
            },
            None => rest.split_once(char::is_whitespace).unwrap_or((rest, "")),
        };

        if path.is_empty() {
            return Self::Usage("Usage: /image <path> [instruction]".to_string());
        }

        let instruction = match instruction.trim() {
            "" => DEFAULT_IMAGE_INSTRUCTION,
            text => text,
        };
        Self::Image {
            path: PathBuf::from(path),
            instruction: instruction.to_string(),
        }
    }
}

/// MIME type guessed from an image file extension.
pub fn image_mime(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Reads a local image into extractor input.
///
/// # Errors
///
/// Fails when the file cannot be read or is not a supported image type.
pub async fn load_image(path: &Path) -> QuotedeskResult<Input> {
    let mime = image_mime(path).ok_or_else(|| {
        ExtractorError::new(ExtractorErrorKind::ImageRead(format!(
            "{} is not a png, jpeg, gif or webp file",
            path.display()
        )))
    })?;
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        ExtractorError::new(ExtractorErrorKind::ImageRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), mime, "Loaded image");

    Ok(Input::Image {
        mime: Some(mime.to_string()),
        source: MediaSource::Binary(bytes),
    })
}

/// Runs the console until an exit keyword or end of input.
///
/// Turn failures are printed and the loop continues.
///
/// # Errors
///
/// Fails only when reading input or writing output fails.
pub async fn run<S, E, R, W>(
    assistant: &SheetAssistant<S, E>,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    S: RowStore,
    E: IntentExtractor,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output
        .write_all(format!("--- Sheet assistant: {} ---\n", assistant.title()).as_bytes())
        .await?;

    let mut lines = input.lines();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let content = match ConsoleCommand::parse(&line) {
            ConsoleCommand::Exit => break,
            ConsoleCommand::Empty => continue,
            ConsoleCommand::Usage(usage) => {
                output.write_all(format!("{}\n", usage).as_bytes()).await?;
                continue;
            }
            ConsoleCommand::Text(text) => vec![Input::Text(text)],
            ConsoleCommand::Image { path, instruction } => match load_image(&path).await {
                Ok(image) => vec![Input::Text(instruction), image],
                Err(e) => {
                    output.write_all(format!("Error: {}\n", e).as_bytes()).await?;
                    continue;
                }
            },
        };

        let report = match assistant.handle(content).await {
            Ok(TurnResult::Answer(text)) => format!("\nBot: {}\n", text),
            Ok(TurnResult::Applied(outcomes)) => outcomes
                .iter()
                .map(|outcome| format!(">> {}\n", outcome))
                .collect(),
            Err(e) => {
                warn!(error = %e, "Turn failed");
                match e.kind() {
                    QuotedeskErrorKind::Sheet(_) => {
                        format!("Error fetching data: {}\n{}\n", e, HEADER_TIP)
                    }
                    _ => format!("Error: {}\n", e),
                }
            }
        };
        output.write_all(report.as_bytes()).await?;
    }

    output.write_all(b"Goodbye.\n").await?;
    output.flush().await
}
