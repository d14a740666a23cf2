//! User Acknowledgments
//!
//! Blocking messages telling the user how an action ended.

use std::fmt;

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgment {
    Invalid(ValidationError),
    Created,
    CreateFailed,
    Updated,
    UpdateFailed,
    Deleted,
    DeleteFailed,
}

impl fmt::Display for Acknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acknowledgment::Invalid(err) => write!(f, "{}", err),
            Acknowledgment::Created => f.write_str("registro agregado correctamente!"),
            Acknowledgment::CreateFailed => f.write_str("Error al agregar un articulo!"),
            Acknowledgment::Updated => f.write_str("Articulo actualizado!"),
            Acknowledgment::UpdateFailed => f.write_str("Error al actualizar el articulo!"),
            Acknowledgment::Deleted => f.write_str("Articulo eliminado!"),
            Acknowledgment::DeleteFailed => f.write_str("Error al eliminar el articulo!"),
        }
    }
}

impl From<ValidationError> for Acknowledgment {
    fn from(err: ValidationError) -> Self {
        Acknowledgment::Invalid(err)
    }
}

/// Where acknowledgments are shown.
pub trait Notifier {
    fn acknowledge(&self, ack: &Acknowledgment);
}

/// Shows acknowledgments with `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn acknowledge(&self, ack: &Acknowledgment) {
        let message = ack.to_string();
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(&message) {
                    log::error!("[ALERT] could not show {:?}: {:?}", message, e);
                }
            }
            None => log::warn!("[ALERT] no window, dropping {:?}", message),
        }
    }
}
