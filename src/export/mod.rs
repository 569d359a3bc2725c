//! Export des analyses au format texte délimité (une ligne par analyse).
//!
//! Seule la colonne résumé est entourée de guillemets (guillemets internes
//! doublés) : les autres champs sortent du moteur sans virgule possible.
//! Le contenu est remis au mécanisme de téléchargement avec un nom de
//! fichier daté du jour.

use chrono::Local;

use crate::error::AppError;
use crate::types::AnalysisRecord;

const ENTETE: &str =
    "Ticket,Service,Catégorie,Priorité,Urgence,Impact,Résumé,Temps estimé,Récurrent,Date d'analyse";

fn oui_non(valeur: bool) -> &'static str {
    if valeur {
        "Oui"
    } else {
        "Non"
    }
}

/// Résumé entre guillemets, guillemets internes doublés.
fn champ_resume(resume: &str) -> String {
    format!("\"{}\"", resume.replace('"', "\"\""))
}

/// Sérialise le lot d'analyses. Un lot vide est une condition d'appel
/// (`ExportVide`), jamais un fichier réduit à l'en-tête.
pub fn export_csv(analyses: &[AnalysisRecord]) -> Result<String, AppError> {
    if analyses.is_empty() {
        return Err(AppError::ExportVide);
    }

    let mut sortie = String::from(ENTETE);
    sortie.push('\n');

    for analyse in analyses {
        sortie.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            analyse.ticket_code,
            analyse.service,
            analyse.categorie,
            analyse.priorite,
            analyse.urgence,
            analyse.impact,
            champ_resume(&analyse.resume),
            analyse.temps_resolution_estime,
            oui_non(analyse.est_recurrent),
            analyse.date_analyse.format("%d/%m/%Y %H:%M"),
        ));
    }

    Ok(sortie)
}

/// Nom de fichier proposé au téléchargement, daté du jour.
pub fn nom_fichier_export() -> String {
    format!("analyses_incidents_{}.csv", Local::now().format("%Y-%m-%d"))
}
