use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Incohérence de cardinalité: {tickets} tickets pour {analyses} analyses")]
    CardinaliteIncoherente { tickets: usize, analyses: usize },

    #[error("Analyse orpheline: aucun ticket d'identifiant {0}")]
    TicketInconnu(i64),

    #[error("Horodatage invalide: {0}")]
    HorodatageInvalide(String),

    #[error("Aucune analyse à exporter")]
    ExportVide,
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
