//! Offer document rendering.
//!
//! Offers are docx files. A docx is a zip archive whose visible text lives
//! in the `word/document.xml` entry, so rendering rewrites that one entry
//! through tera and copies every other entry untouched.

use std::io::{Cursor, Read, Write};
use std::path::PathBuf;

use chrono::Local;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const DOCUMENT_ENTRY: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("offer template not found at {0}")]
    TemplateMissing(PathBuf),
    #[error("failed to read template: {0}")]
    Io(#[from] std::io::Error),
    #[error("template is not a valid docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("template merge failed: {0}")]
    Merge(#[from] tera::Error),
}

/// Data merged into one offer document.
#[derive(Debug, Clone)]
pub struct OfferDocument {
    pub inquiry_id: String,
    /// Company name as stored, may be empty.
    pub company_name: String,
    /// Salutation and contact names joined with spaces.
    pub contact_name: String,
    pub event_date: chrono::NaiveDate,
    pub participants: i32,
    pub total: f64,
    pub lines: Vec<OfferLine>,
}

#[derive(Debug, Clone)]
pub struct OfferLine {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

/// Rendered document bytes plus the file name derived for them.
#[derive(Debug, Clone)]
pub struct RenderedOffer {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Merges offer data into a binary document template.
pub trait OfferRenderer: Send + Sync {
    fn render(&self, document: &OfferDocument) -> Result<RenderedOffer, RenderError>;
}

/// Renderer backed by a docx template on disk.
#[derive(Clone)]
pub struct DocxTemplateRenderer {
    template_path: PathBuf,
}

impl DocxTemplateRenderer {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }
}

impl OfferRenderer for DocxTemplateRenderer {
    fn render(&self, document: &OfferDocument) -> Result<RenderedOffer, RenderError> {
        if !self.template_path.exists() {
            return Err(RenderError::TemplateMissing(self.template_path.clone()));
        }

        let template = std::fs::read(&self.template_path)?;
        let bytes = merge_document(&template, &template_context(document))?;

        Ok(RenderedOffer {
            filename: offer_filename(&document.inquiry_id, &document.company_name),
            bytes,
        })
    }
}

fn merge_document(template: &[u8], context: &Context) -> Result<Vec<u8>, RenderError> {
    let mut archive = ZipArchive::new(Cursor::new(template))?;
    let mut output = Cursor::new(Vec::new());

    {
        let mut writer = ZipWriter::new(&mut output);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = entry.name().to_string();

            if name == DOCUMENT_ENTRY {
                let mut xml = String::new();
                entry.read_to_string(&mut xml)?;
                let merged = Tera::one_off(&xml, context, true)?;

                writer.start_file(name.as_str(), options)?;
                writer.write_all(merged.as_bytes())?;
            } else {
                let mut raw = Vec::new();
                entry.read_to_end(&mut raw)?;

                writer.start_file(name.as_str(), options)?;
                writer.write_all(&raw)?;
            }
        }

        writer.finish()?;
    }

    Ok(output.into_inner())
}

#[derive(Serialize)]
struct PositionRow {
    name: String,
    menge: String,
    brutto_preis: String,
    gesamt: String,
}

fn template_context(document: &OfferDocument) -> Context {
    let mut context = Context::new();

    let company = if document.company_name.is_empty() {
        "Musterfirma"
    } else {
        document.company_name.as_str()
    };

    context.insert("firma_name", company);
    context.insert("ansprechpartner", &document.contact_name);
    context.insert("datum", &Local::now().format("%d.%m.%Y").to_string());
    context.insert(
        "anfrage_datum",
        &document.event_date.format("%d.%m.%Y").to_string(),
    );
    context.insert("teilnehmer", &document.participants);
    context.insert("total_summe", &format_amount(document.total));

    let positions: Vec<PositionRow> = document
        .lines
        .iter()
        .map(|line| PositionRow {
            name: line.name.clone(),
            menge: format_quantity(line.quantity),
            brutto_preis: format_amount(line.unit_price),
            gesamt: format_amount(line.total),
        })
        .collect();
    context.insert("positions", &positions);

    context
}

/// Two decimals with the German comma separator, e.g. `680,00`.
fn format_amount(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

/// Whole quantities without a decimal tail, fractional ones with a comma.
fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}").replace('.', ",")
    }
}

fn offer_filename(inquiry_id: &str, company_name: &str) -> String {
    format!("Angebot_{inquiry_id}_{}.docx", company_name.replace(' ', "_"))
}
