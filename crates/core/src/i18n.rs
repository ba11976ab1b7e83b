//! Localized user-facing messages.

use crate::Language;

/// English "not found" sentinel the search prompt asks the model to emit.
pub const NOT_FOUND_EN: &str = "I couldn't find this information in your uploaded documents.";

/// Spanish "not found" sentinel.
pub const NOT_FOUND_ES: &str = "No pude encontrar esta información en los documentos cargados.";

/// Messages surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Any failure while talking to the text generation backend.
    AiError,
    /// The answer is not in the document corpus.
    NotFound,
    /// Failure without a usable message.
    ErrorUnknown,
    /// The uploaded archive could not be decoded.
    UploadErrorGeneral,
}

impl Message {
    /// The message text in `language`.
    pub fn text(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::AiError, Language::En) => {
                "An error occurred while communicating with the AI. Please check your API key and connection."
            }
            (Self::AiError, Language::Es) => {
                "Se produjo un error al comunicarse con la IA. Verifique su clave de API y su conexión."
            }
            (Self::NotFound, Language::En) => NOT_FOUND_EN,
            (Self::NotFound, Language::Es) => NOT_FOUND_ES,
            (Self::ErrorUnknown, Language::En) => "An unknown error occurred.",
            (Self::ErrorUnknown, Language::Es) => "Ocurrió un error desconocido.",
            (Self::UploadErrorGeneral, Language::En) => {
                "File could not be processed. Ensure it is a valid zipped shapefile."
            }
            (Self::UploadErrorGeneral, Language::Es) => {
                "El archivo no pudo ser procesado. Asegúrese de que sea un shapefile comprimido en .zip válido."
            }
        }
    }
}

/// Shorthand for [`Message::text`].
pub fn t(message: Message, language: Language) -> &'static str {
    message.text(language)
}
