pub const APPLICATION_NAME: &str = "image-text-formatter";

pub const LOG_TAG_MAIN: &str = "[MAIN]";

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

pub const LEGACY_IMAGE_MIME_TYPE: &str = "image/jpeg";

pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const GENERIC_REMOTE_ERROR_MESSAGE: &str = "Failed to process image";

pub const INSTRUCTION_PROMPT_HEADER: &str = concat!(
    "You are a text extraction and formatting assistant. \n",
    "\n",
    "1. First, extract ALL text from the provided image using OCR.\n",
    "2. Then, format the extracted text according to this template/instructions:\n",
    "\n",
);

pub const INSTRUCTION_PROMPT_FOOTER: &str = "

Important:
- Extract text accurately from the image
- Apply the formatting template to the extracted text
- Only return the final formatted result, nothing else
- If the template contains placeholders or structure, fill them with the extracted text appropriately";

pub const USER_MESSAGE_NO_IMAGE: &str = "No image selected. Please select an image first.";
pub const USER_MESSAGE_NO_TEMPLATE: &str =
    "No format instructions given. Describe how the extracted text should be formatted.";
pub const USER_MESSAGE_MISSING_KEY: &str =
    "Gemini API key not configured. Run `image-text-formatter key set <KEY>` first.";
pub const USER_MESSAGE_COPIED: &str = "Formatted text copied to clipboard.";
pub const USER_MESSAGE_READY: &str = "Ready";
pub const USER_MESSAGE_PROCESSING: &str = "Processing...";
