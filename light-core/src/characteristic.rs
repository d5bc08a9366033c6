//! In-Memory Protokoll-Attribut
//!
//! Referenz-Implementierung von [`ProtocolValue`]: hält den bestätigten Wert,
//! optional einen ausstehenden Wert aus einem Fernschreibzugriff und einen
//! erlaubten Wertebereich.

use crate::traits::ProtocolValue;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Characteristic<T> {
    value: T,
    pending: Option<T>,
    range: Option<(T, T)>,
}

impl<T: Copy + PartialOrd> Characteristic<T> {
    pub const fn new(value: T) -> Self {
        Self {
            value,
            pending: None,
            range: None,
        }
    }

    /// Setzt den erlaubten Bereich für Fernschreibzugriffe.
    /// Der aktuelle Wert bleibt unverändert.
    pub fn with_range(mut self, min: T, max: T) -> Self {
        self.range = Some((min, max));
        self
    }

    pub fn range(&self) -> Option<(T, T)> {
        self.range
    }

    /// Schreibzugriff vom Controller: wird auf den Bereich begrenzt und als
    /// ausstehender Wert gespeichert
    pub fn request(&mut self, value: T) {
        self.pending = Some(self.clamp(value));
    }

    /// Übernimmt den ausstehenden Wert
    pub fn commit(&mut self) {
        if let Some(value) = self.pending.take() {
            self.value = value;
        }
    }

    /// Verwirft den ausstehenden Wert
    pub fn discard(&mut self) {
        self.pending = None;
    }

    fn clamp(&self, value: T) -> T {
        match self.range {
            Some((min, _)) if value < min => min,
            Some((_, max)) if value > max => max,
            _ => value,
        }
    }
}

impl<T: Copy + PartialOrd> ProtocolValue<T> for Characteristic<T> {
    fn confirmed(&self) -> T {
        self.value
    }

    fn pending(&self) -> T {
        self.pending.unwrap_or(self.value)
    }

    fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    // Kein Range-Check: entspricht dem Neuanlegen des Attributs
    fn set(&mut self, value: T) {
        self.value = value;
        self.pending = None;
    }
}
