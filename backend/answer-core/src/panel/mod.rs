//! The panel workflow: read the selected cell, ask the service, write the
//! cleaned answer one column to the right.
//!
//! The spreadsheet host and the status surface are injected, so the same
//! workflow drives a real add-in host, the CLI, or a test double.

use crate::answer_client::AnswerClient;
use crate::config::AppConfig;
use crate::error::{AnswerClientError, HostError, PanelError};
use crate::normalizer::NormalizeStrategy;

use common::BearerToken;

use std::future::Future;

use log::{error, info};

pub const LOADING_MESSAGE: &str = "Analyzing question...";
pub const SUCCESS_MESSAGE: &str = "Answer written to adjacent cell";

/// Font color of written answers (green).
pub const ANSWER_FONT_COLOR: &str = "#008000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

/// How and where the host should write the answer, relative to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellFormat {
    pub row_offset: i32,
    pub column_offset: i32,
    pub font_color: &'static str,
    pub wrap_text: bool,
    pub vertical_alignment: VerticalAlignment,
}

impl CellFormat {
    /// One column right of the selection, green, wrapped, top-aligned.
    pub fn answer() -> Self {
        Self {
            row_offset: 0,
            column_offset: 1,
            font_color: ANSWER_FONT_COLOR,
            wrap_text: true,
            vertical_alignment: VerticalAlignment::Top,
        }
    }
}

/// State shown to the user for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelStatus {
    Loading(String),
    Success(String),
    Error(String),
}

impl PanelStatus {
    pub fn message(&self) -> &str {
        match self {
            PanelStatus::Loading(message)
            | PanelStatus::Success(message)
            | PanelStatus::Error(message) => message,
        }
    }
}

/// The spreadsheet environment.
pub trait CellHost {
    /// Text value of the currently selected cell.
    fn read_selection(&self) -> impl Future<Output = Result<String, HostError>>;

    /// Write `text` at `format`'s offset from the selection, applying its formatting.
    fn write_answer(
        &self,
        text: &str,
        format: &CellFormat,
    ) -> impl Future<Output = Result<(), HostError>>;
}

/// Where status updates go.
pub trait StatusSink {
    fn report(&self, status: PanelStatus);
}

impl<F> StatusSink for F
where
    F: Fn(PanelStatus),
{
    fn report(&self, status: PanelStatus) {
        self(status)
    }
}

/// Status sink that writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStatusSink;

impl StatusSink for LogStatusSink {
    fn report(&self, status: PanelStatus) {
        match &status {
            PanelStatus::Error(message) => error!("{message}"),
            other => info!("{}", other.message()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnswerPanel {
    client: AnswerClient,
    strategy: NormalizeStrategy,
}

impl AnswerPanel {
    pub fn new(client: AnswerClient, strategy: NormalizeStrategy) -> Self {
        Self { client, strategy }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AnswerClientError> {
        Ok(Self::new(
            AnswerClient::from_config(&config.service)?,
            config.normalizer.strategy,
        ))
    }

    pub fn client(&self) -> &AnswerClient {
        &self.client
    }

    /// Run one read → ask → write cycle and return the text written.
    ///
    /// Reports `Loading` first, then exactly one of `Success` or `Error`.
    /// Nothing is written to the host unless the service produced an answer.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError`] if reading the selection, the service call, or
    /// writing the answer fails.
    pub async fn answer_selection<H, S>(
        &self,
        host: &H,
        status: &S,
        credential: Option<&BearerToken>,
    ) -> Result<String, PanelError>
    where
        H: CellHost,
        S: StatusSink + ?Sized,
    {
        status.report(PanelStatus::Loading(LOADING_MESSAGE.to_string()));

        match self.run(host, credential).await {
            Ok(text) => {
                status.report(PanelStatus::Success(SUCCESS_MESSAGE.to_string()));
                Ok(text)
            }
            Err(e) => {
                status.report(PanelStatus::Error(e.user_message()));
                Err(e)
            }
        }
    }

    async fn run<H: CellHost>(
        &self,
        host: &H,
        credential: Option<&BearerToken>,
    ) -> Result<String, PanelError> {
        let question = host.read_selection().await?;
        let answer = self.client.submit(&question, credential).await?;
        let text = answer.normalized(self.strategy);

        host.write_answer(&text, &CellFormat::answer()).await?;
        Ok(text)
    }
}
