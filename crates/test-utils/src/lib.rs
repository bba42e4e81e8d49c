use async_trait::async_trait;
use brs::{GenerateError, GenerativeContentProvider};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock Generative Provider ---

/// A recorded call to [`MockGenerativeProvider::generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub prompt: String,
    pub document: String,
}

/// A test double for `GenerativeContentProvider`.
///
/// Every call is recorded. The reply is the programmed response, or the
/// programmed failure message wrapped in `GenerateError::AiApi` with status 500.
#[derive(Clone, Debug)]
pub struct MockGenerativeProvider {
    response: Arc<Mutex<Result<String, String>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGenerativeProvider {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(Ok("mock response".to_string()))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pre-programs the text returned by every subsequent call.
    pub fn respond_with(&self, text: &str) {
        *self.response.lock().unwrap() = Ok(text.to_string());
    }

    /// Pre-programs every subsequent call to fail with the given upstream body.
    pub fn fail_with(&self, body: &str) {
        *self.response.lock().unwrap() = Err(body.to_string());
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockGenerativeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeContentProvider for MockGenerativeProvider {
    async fn generate(&self, prompt: &str, document: &str) -> Result<String, GenerateError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            document: document.to_string(),
        });

        match &*self.response.lock().unwrap() {
            Ok(text) => Ok(text.clone()),
            Err(body) => Err(GenerateError::AiApi {
                status: 500,
                body: body.clone(),
            }),
        }
    }
}

// --- Test-Specific Helpers ---
#[cfg(feature = "pdf")]
pub mod helpers {
    use anyhow::Result;
    use base64::{engine::general_purpose, Engine as _};
    use printpdf::{
        BuiltinFont, Layer, Mm, Op, ParsedFont, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextItem,
        TextMatrix, TextRenderingMode,
    };

    /// Generates a single-page PDF with the given text, compatible with printpdf v0.8.2.
    pub fn generate_test_pdf(text: &str) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new("Accounting Sample");
        let mut page = PdfPage::new(Mm(210.0), Mm(297.0), vec![]);
        let layer_id = doc.add_layer(&Layer::new("Layer 1"));

        let font_bytes = BuiltinFont::Helvetica.get_subset_font().bytes;
        let font = ParsedFont::from_bytes(&font_bytes, 0, &mut Vec::new())
            .ok_or_else(|| anyhow::anyhow!("Failed to parse built-in font"))?;
        let font_id = doc.add_font(&font);

        page.ops = vec![
            Op::BeginLayer {
                layer_id: layer_id.clone(),
            },
            Op::SetFontSize {
                size: Pt(12.0),
                font: font_id.clone(),
            },
            Op::StartTextSection,
            Op::SetTextMatrix {
                matrix: TextMatrix::Translate(Mm(10.0).into(), Mm(280.0).into()),
            },
            Op::SetTextRenderingMode {
                mode: TextRenderingMode::Fill,
            },
            Op::WriteText {
                items: vec![TextItem::Text(text.to_string())],
                font: font_id,
            },
            Op::EndTextSection,
            Op::EndLayer { layer_id },
        ];
        doc.pages.push(page);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            eprintln!("PDF generation warnings: {warnings:?}");
        }

        Ok(bytes)
    }

    /// Generates a test PDF and encodes it the way clients upload it (`fileBase64`).
    pub fn generate_test_pdf_base64(text: &str) -> Result<String> {
        Ok(general_purpose::STANDARD.encode(generate_test_pdf(text)?))
    }
}
