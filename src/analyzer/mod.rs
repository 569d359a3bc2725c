//! Analyse des tickets : classification, triage, préconisations, puis
//! agrégation en statistiques par service et synthèse quotidienne.
//!
//! Chaque ticket est analysé indépendamment (aucun état partagé) ; le lot
//! est tout-ou-rien, la première erreur interrompt l'analyse.

pub mod classifier;
pub mod guidance;
pub mod rapport;
pub mod triage;

use chrono::Local;

use crate::error::AppError;
use crate::types::{AnalysisRecord, TicketRecord};
use classifier::Classifier;

/// Analyse un ticket : catégorie et priorité via le classifieur, axes
/// urgence/impact via le triage, puis préconisations.
pub fn analyse_ticket(
    classifier: &Classifier,
    ticket: &TicketRecord,
) -> Result<AnalysisRecord, AppError> {
    let texte = Classifier::texte_combine(ticket);
    let categorie = classifier.inferer_categorie(&texte);
    let priorite = classifier.inferer_priorite(&texte, &ticket.statut);
    let (urgence, impact) = triage::deriver_triage(priorite, &texte, classifier.lexique());
    let resume = guidance::resume(ticket, categorie)?;

    Ok(AnalysisRecord {
        ticket_id: ticket.id,
        ticket_code: ticket.code.clone(),
        service: ticket.service.clone(),
        categorie,
        priorite,
        urgence,
        impact,
        resume,
        solutions_proposees: guidance::solutions_proposees(categorie),
        etapes_resolution: guidance::etapes_resolution(priorite),
        competences_requises: guidance::competences_requises(categorie),
        // TODO: rapprocher le ticket de l'historique clos pour détecter la
        // récurrence ; en attendant le champ reste figé à false.
        est_recurrent: false,
        temps_resolution_estime: guidance::temps_resolution_estime(priorite),
        escalade_necessaire: guidance::escalade_necessaire(priorite),
        tickets_lies: Vec::new(),
        date_analyse: Local::now().naive_local(),
    })
}

/// Analyse un lot complet. Une analyse par ticket, dans l'ordre d'entrée ;
/// la moindre erreur (horodatage invalide) fait échouer tout le lot.
pub fn analyse_tickets(
    classifier: &Classifier,
    tickets: &[TicketRecord],
) -> Result<Vec<AnalysisRecord>, AppError> {
    tickets
        .iter()
        .map(|ticket| analyse_ticket(classifier, ticket))
        .collect()
}
