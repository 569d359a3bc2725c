//! Moteur d'analyse des tickets d'incident : classification par lexique,
//! triage urgence/impact, préconisations, statistiques par service,
//! synthèse quotidienne et export délimité.
//!
//! Le moteur est une transformation pure et synchrone d'un lot en mémoire :
//! pas de persistance, pas de réseau, aucun état conservé entre deux appels.
//! La récupération des tickets et la consommation des résultats sont du
//! ressort de l'appelant.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod export;
pub mod types;

pub use analyzer::classifier::Classifier;
pub use analyzer::rapport::{build_daily_summary, build_department_stats};
pub use analyzer::{analyse_ticket, analyse_tickets};
pub use config::Lexique;
pub use error::AppError;
pub use export::{export_csv, nom_fichier_export};
pub use types::{
    AnalysisRecord, CriticalIssue, DailySummary, DepartmentStats, IncidentCategory, PriorityTier,
    TicketRecord,
};

// ─── E2E Integration Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod e2e_tests {
    use crate::types::ticket_de_test;
    use crate::*;

    /// E2E : panne de production → classification critique de bout en bout.
    #[test]
    fn test_e2e_panne_production() {
        let classifier = Classifier::default();
        let mut ticket = ticket_de_test(1);
        ticket.motif = "Panne totale du serveur de production".to_string();
        ticket.description = "Plus aucun poste ne répond depuis ce matin".to_string();
        ticket.statut = "ouvert".to_string();

        let analyse = analyse_ticket(&classifier, &ticket).unwrap();

        assert_eq!(analyse.categorie, IncidentCategory::Reseau);
        assert_eq!(analyse.priorite, PriorityTier::Critique);
        assert_eq!(analyse.urgence, PriorityTier::Critique);
        assert!(analyse.escalade_necessaire);
        assert_eq!(analyse.temps_resolution_estime, "< 1 heure");
        assert_eq!(analyse.etapes_resolution[0], "Contacter immédiatement le demandeur");
    }

    /// E2E : ticket vide et clos → catégorie Autre, priorité Basse.
    #[test]
    fn test_e2e_ticket_vide_clos() {
        let classifier = Classifier::default();
        let mut ticket = ticket_de_test(2);
        ticket.motif = String::new();
        ticket.description = String::new();
        ticket.statut = "clos".to_string();

        let analyse = analyse_ticket(&classifier, &ticket).unwrap();

        assert_eq!(analyse.categorie, IncidentCategory::Autre);
        assert_eq!(analyse.priorite, PriorityTier::Basse);
        assert_eq!(analyse.urgence, PriorityTier::Basse);
        assert_eq!(analyse.impact, PriorityTier::Basse);
        assert!(!analyse.escalade_necessaire);
    }

    /// E2E : lot complet → analyses → synthèse → export.
    #[test]
    fn test_e2e_lot_complet() {
        let classifier = Classifier::default();

        let motifs = [
            ("Panne totale du réseau, tous les postes touchés", "ouvert", "Ventes"),
            ("Production arrêtée, client bloqué", "ouvert", "Ventes"),
            ("Plantage critique de l'application comptable", "ouvert", "Ventes"),
            ("Question sur une licence logicielle", "clos", "RH"),
            ("Mot de passe oublié", "ouvert", "RH"),
        ];
        let tickets: Vec<TicketRecord> = motifs
            .iter()
            .enumerate()
            .map(|(i, (motif, statut, service))| {
                let mut t = ticket_de_test(i as i64 + 1);
                t.motif = motif.to_string();
                t.statut = statut.to_string();
                t.service = service.to_string();
                t
            })
            .collect();

        let analyses = analyse_tickets(&classifier, &tickets).unwrap();
        assert_eq!(analyses.len(), tickets.len());

        let synthese = build_daily_summary(&tickets, &analyses).unwrap();
        assert_eq!(synthese.total_tickets, 5);
        assert_eq!(synthese.stats_par_service[0].service, "Ventes");
        assert_eq!(synthese.stats_par_service[0].critiques, 3);
        // 3 tickets critiques chez Ventes → avertissement, puis escalade.
        assert!(synthese.recommandations[0].contains("Ventes"));
        assert!(synthese
            .recommandations
            .last()
            .unwrap()
            .contains("escalade"));

        let csv = export_csv(&analyses).unwrap();
        assert_eq!(csv.lines().count(), 6);

        let nom = nom_fichier_export();
        assert!(nom.starts_with("analyses_incidents_"));
        assert!(nom.ends_with(".csv"));
    }

    /// E2E : cohérence globale des ventilations sur un lot hétérogène.
    #[test]
    fn test_e2e_somme_des_ventilations() {
        let classifier = Classifier::default();
        let motifs = [
            "panne totale", "urgent", "problème", "question", "wifi coupé",
            "virus détecté", "imprimante bloquée", "",
        ];
        let tickets: Vec<TicketRecord> = motifs
            .iter()
            .enumerate()
            .map(|(i, motif)| {
                let mut t = ticket_de_test(i as i64 + 1);
                t.motif = motif.to_string();
                t.service = if i % 2 == 0 { "Ventes" } else { "RH" }.to_string();
                t
            })
            .collect();

        let analyses = analyse_tickets(&classifier, &tickets).unwrap();
        let stats = build_department_stats(&tickets, &analyses).unwrap();

        let somme: usize = stats
            .iter()
            .map(|s| s.critiques + s.hautes + s.moyennes + s.basses)
            .sum();
        assert_eq!(somme, tickets.len());
    }

    /// Le contrat d'interface UI : structures sérialisées en camelCase.
    #[test]
    fn test_serialisation_camel_case() {
        let classifier = Classifier::default();
        let analyse = analyse_ticket(&classifier, &ticket_de_test(1)).unwrap();
        let json = serde_json::to_value(&analyse).unwrap();

        assert!(json.get("ticketCode").is_some());
        assert!(json.get("solutionsProposees").is_some());
        assert!(json.get("escaladeNecessaire").is_some());
        assert!(json.get("ticket_code").is_none());

        let erreur = AppError::ExportVide;
        assert_eq!(
            serde_json::to_value(&erreur).unwrap(),
            serde_json::json!("Aucune analyse à exporter")
        );
    }
}
