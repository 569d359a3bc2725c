//! Génération des préconisations : résumé, pistes de résolution,
//! étapes, compétences, délai estimé et indicateur d'escalade.

use chrono::NaiveDateTime;

use crate::error::AppError;
use crate::types::{IncidentCategory, PriorityTier, TicketRecord};

/// Solutions génériques, utilisées quand la catégorie n'a pas de table dédiée.
const SOLUTIONS_GENERIQUES: &[&str] = &[
    "Collecter des informations complémentaires auprès du demandeur",
    "Tenter de reproduire le problème",
    "Consulter la base de connaissances",
    "Escalader vers un expert",
];

const COMPETENCES_GENERIQUES: &[&str] = &["Support informatique généraliste"];

/// Étapes de résolution standard, dans l'ordre d'exécution.
const ETAPES_STANDARD: &[&str] = &[
    "Prendre contact avec le demandeur",
    "Recueillir les détails du problème",
    "Appliquer le correctif adapté",
    "Valider la résolution avec le demandeur",
    "Documenter l'intervention",
    "Clôturer le ticket",
];

/// Étapes substituées aux deux premières quand la priorité est Critique.
const ETAPES_URGENTES: &[&str] = &[
    "Contacter immédiatement le demandeur",
    "Évaluer l'étendue de l'impact",
];

fn vers_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Résumé normalisé : demandeur, service, catégorie, motif et date de
/// création au format français. Un horodatage non conforme est une erreur,
/// jamais une date inventée.
pub fn resume(ticket: &TicketRecord, categorie: IncidentCategory) -> Result<String, AppError> {
    let date = NaiveDateTime::parse_from_str(&ticket.date_creation, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| AppError::HorodatageInvalide(ticket.date_creation.clone()))?;

    let motif = if ticket.motif.trim().is_empty() {
        "Sans objet"
    } else {
        ticket.motif.as_str()
    };

    Ok(format!(
        "Incident {} signalé par {} {} du service {} : \"{}\" (créé le {})",
        categorie,
        ticket.prenom,
        ticket.nom,
        ticket.service,
        motif,
        date.format("%d/%m/%Y"),
    ))
}

/// Pistes de résolution par catégorie, repli générique sinon.
pub fn solutions_proposees(categorie: IncidentCategory) -> Vec<String> {
    match categorie {
        IncidentCategory::Reseau => vers_strings(&[
            "Vérifier l'état de la connexion et du câblage",
            "Redémarrer la box ou le point d'accès",
            "Contrôler la configuration VPN et proxy",
        ]),
        IncidentCategory::Materiel => vers_strings(&[
            "Vérifier les branchements et l'alimentation",
            "Tester le périphérique sur un autre poste",
            "Prévoir un remplacement si le matériel est défectueux",
        ]),
        IncidentCategory::Logiciel => vers_strings(&[
            "Redémarrer l'application puis le poste",
            "Vérifier la version installée et appliquer les mises à jour",
            "Réinstaller l'application si le problème persiste",
        ]),
        IncidentCategory::Acces => vers_strings(&[
            "Réinitialiser le mot de passe",
            "Vérifier le verrouillage et les droits du compte",
            "Contrôler les habilitations avec le responsable",
        ]),
        IncidentCategory::Messagerie => vers_strings(&[
            "Vérifier les paramètres du client de messagerie",
            "Contrôler les quotas de la boîte",
            "Tester l'envoi et la réception depuis le webmail",
        ]),
        IncidentCategory::Securite => vers_strings(&[
            "Isoler le poste du réseau",
            "Lancer une analyse antivirus complète",
            "Signaler l'incident au référent sécurité",
        ]),
        IncidentCategory::Donnees
        | IncidentCategory::Performance
        | IncidentCategory::Autre => vers_strings(SOLUTIONS_GENERIQUES),
    }
}

/// Compétences attendues de l'intervenant, repli générique sinon.
pub fn competences_requises(categorie: IncidentCategory) -> Vec<String> {
    match categorie {
        IncidentCategory::Reseau => {
            vers_strings(&["Administration réseau", "Diagnostic TCP/IP"])
        }
        IncidentCategory::Materiel => {
            vers_strings(&["Maintenance matérielle", "Gestion de parc"])
        }
        IncidentCategory::Logiciel => {
            vers_strings(&["Support applicatif", "Déploiement logiciel"])
        }
        IncidentCategory::Acces => {
            vers_strings(&["Gestion des identités", "Annuaire d'entreprise"])
        }
        IncidentCategory::Securite => {
            vers_strings(&["Analyse sécurité", "Réponse à incident"])
        }
        IncidentCategory::Messagerie
        | IncidentCategory::Donnees
        | IncidentCategory::Performance
        | IncidentCategory::Autre => vers_strings(COMPETENCES_GENERIQUES),
    }
}

/// Étapes de résolution : séquence standard, sauf en priorité Critique où
/// la prise de contact immédiate et l'évaluation d'impact remplacent les
/// deux premières étapes, avant l'application du correctif.
pub fn etapes_resolution(priorite: PriorityTier) -> Vec<String> {
    if priorite == PriorityTier::Critique {
        let mut etapes = vers_strings(ETAPES_URGENTES);
        etapes.extend(vers_strings(&ETAPES_STANDARD[2..]));
        etapes
    } else {
        vers_strings(ETAPES_STANDARD)
    }
}

/// Délai de résolution estimé, fonction de la seule priorité.
pub fn temps_resolution_estime(priorite: PriorityTier) -> String {
    match priorite {
        PriorityTier::Critique => "< 1 heure",
        PriorityTier::Haute => "2-4 heures",
        PriorityTier::Moyenne => "4-8 heures",
        PriorityTier::Basse => "1-2 jours",
    }
    .to_string()
}

/// Escalade requise pour les priorités Haute et Critique uniquement.
pub fn escalade_necessaire(priorite: PriorityTier) -> bool {
    priorite >= PriorityTier::Haute
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ticket_de_test;

    #[test]
    fn test_resume_template() {
        let mut ticket = ticket_de_test(7);
        ticket.motif = "Imprimante en panne".to_string();
        let resume = resume(&ticket, IncidentCategory::Materiel).unwrap();
        assert_eq!(
            resume,
            "Incident Matériel signalé par Marie Dupont du service Comptabilité : \
             \"Imprimante en panne\" (créé le 28/08/2026)"
        );
    }

    #[test]
    fn test_resume_motif_vide() {
        let mut ticket = ticket_de_test(8);
        ticket.motif = "   ".to_string();
        let resume = resume(&ticket, IncidentCategory::Autre).unwrap();
        assert!(resume.contains("\"Sans objet\""));
    }

    #[test]
    fn test_resume_horodatage_invalide() {
        let mut ticket = ticket_de_test(9);
        ticket.date_creation = "28/08/2026".to_string();
        let err = resume(&ticket, IncidentCategory::Autre).unwrap_err();
        assert!(matches!(err, AppError::HorodatageInvalide(_)));
    }

    #[test]
    fn test_solutions_repli_generique() {
        assert_eq!(
            solutions_proposees(IncidentCategory::Performance),
            vers_strings(SOLUTIONS_GENERIQUES)
        );
        assert_eq!(
            solutions_proposees(IncidentCategory::Autre),
            vers_strings(SOLUTIONS_GENERIQUES)
        );
        // Les catégories dotées d'une table dédiée n'utilisent pas le repli.
        assert_ne!(
            solutions_proposees(IncidentCategory::Reseau),
            vers_strings(SOLUTIONS_GENERIQUES)
        );
    }

    #[test]
    fn test_etapes_standard() {
        let etapes = etapes_resolution(PriorityTier::Moyenne);
        assert_eq!(etapes.len(), 6);
        assert_eq!(etapes[0], "Prendre contact avec le demandeur");
        assert_eq!(etapes[5], "Clôturer le ticket");
    }

    #[test]
    fn test_etapes_critiques_remplacent_les_deux_premieres() {
        let etapes = etapes_resolution(PriorityTier::Critique);
        assert_eq!(etapes.len(), 6);
        assert_eq!(etapes[0], "Contacter immédiatement le demandeur");
        assert_eq!(etapes[1], "Évaluer l'étendue de l'impact");
        // La suite de la séquence standard est conservée telle quelle.
        assert_eq!(etapes[2], "Appliquer le correctif adapté");
        assert_eq!(etapes[5], "Clôturer le ticket");
    }

    #[test]
    fn test_temps_estime_par_priorite() {
        assert_eq!(temps_resolution_estime(PriorityTier::Critique), "< 1 heure");
        assert_eq!(temps_resolution_estime(PriorityTier::Haute), "2-4 heures");
        assert_eq!(temps_resolution_estime(PriorityTier::Moyenne), "4-8 heures");
        assert_eq!(temps_resolution_estime(PriorityTier::Basse), "1-2 jours");
    }

    #[test]
    fn test_escalade_ssi_haute_ou_critique() {
        // Les quatre niveaux existants, exhaustivement.
        for priorite in PriorityTier::ALL {
            let attendu =
                priorite == PriorityTier::Haute || priorite == PriorityTier::Critique;
            assert_eq!(escalade_necessaire(priorite), attendu, "{priorite:?}");
        }
    }
}
