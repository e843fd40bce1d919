use crate::core::models::ImagePayload;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq)]
pub struct FormattingRequest {
    pub image: ImagePayload,
    pub template_text: String,
}

impl FormattingRequest {
    pub fn new(image: ImagePayload, template_text: impl Into<String>) -> Self {
        Self {
            image,
            template_text: template_text.into(),
        }
    }

    /// The template is forwarded verbatim between the fixed header and footer.
    pub fn build_instruction_prompt(&self) -> String {
        format!(
            "{}{}{}",
            global_constants::INSTRUCTION_PROMPT_HEADER,
            self.template_text,
            global_constants::INSTRUCTION_PROMPT_FOOTER
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image() -> ImagePayload {
        ImagePayload {
            bytes: vec![1, 2, 3],
            mime_type: "image/png".to_string(),
        }
    }

    #[test]
    fn test_build_instruction_prompt_embeds_template_verbatim() {
        let template = "Name: {name}\n  Total: {total}  ";
        let request = FormattingRequest::new(create_test_image(), template);

        let prompt = request.build_instruction_prompt();

        assert!(prompt.contains("\n\nName: {name}\n  Total: {total}  \n\n"));
    }

    #[test]
    fn test_build_instruction_prompt_asks_for_ocr_then_formatting_only() {
        let request = FormattingRequest::new(create_test_image(), "Convert to bullet points");

        let prompt = request.build_instruction_prompt();

        assert!(prompt.starts_with("You are a text extraction and formatting assistant. \n\n1. First"));
        assert!(prompt.contains("extract ALL text from the provided image using OCR"));
        assert!(prompt.contains("Only return the final formatted result, nothing else"));
    }
}
