//! Agrégation d'un lot d'analyses : statistiques par service, synthèse
//! quotidienne et recommandations.

use std::collections::{BTreeSet, HashMap};

use chrono::Local;

use crate::error::AppError;
use crate::types::{
    AnalysisRecord, CriticalIssue, DailySummary, DepartmentStats, IncidentCategory, PriorityTier,
    TicketRecord,
};

/// Nombre maximal d'extraits critiques repris dans la synthèse.
const MAX_PROBLEMES_CRITIQUES: usize = 5;

/// Longueur maximale (en caractères) d'un extrait de résumé.
const LONGUEUR_EXTRAIT: usize = 100;

/// Seuil strict de tickets critiques au-delà duquel un service fait
/// l'objet d'une recommandation (3 tickets et plus).
const SEUIL_ALERTE_CRITIQUES: usize = 2;

/// Vérifie le contrat d'appel : autant d'analyses que de tickets, et chaque
/// analyse référencée sur un ticket existant. L'appariement se fait par
/// `ticket_id`, jamais par position.
fn verifier_appariement<'a>(
    tickets: &'a [TicketRecord],
    analyses: &[AnalysisRecord],
) -> Result<HashMap<i64, &'a TicketRecord>, AppError> {
    if tickets.len() != analyses.len() {
        return Err(AppError::CardinaliteIncoherente {
            tickets: tickets.len(),
            analyses: analyses.len(),
        });
    }

    let par_id: HashMap<i64, &TicketRecord> = tickets.iter().map(|t| (t.id, t)).collect();
    for analyse in analyses {
        if !par_id.contains_key(&analyse.ticket_id) {
            return Err(AppError::TicketInconnu(analyse.ticket_id));
        }
    }

    Ok(par_id)
}

/// Statistiques par service : comptages par niveau de priorité, total et
/// incidents récurrents. Tri par total décroissant ; à total égal, l'ordre
/// de première apparition des services est conservé.
pub fn build_department_stats(
    tickets: &[TicketRecord],
    analyses: &[AnalysisRecord],
) -> Result<Vec<DepartmentStats>, AppError> {
    verifier_appariement(tickets, analyses)?;

    let mut stats: Vec<DepartmentStats> = Vec::new();
    let mut index_par_service: HashMap<String, usize> = HashMap::new();

    for analyse in analyses {
        let index = *index_par_service
            .entry(analyse.service.clone())
            .or_insert_with(|| {
                stats.push(DepartmentStats::new(analyse.service.clone()));
                stats.len() - 1
            });
        let entree = &mut stats[index];

        match analyse.priorite {
            PriorityTier::Critique => entree.critiques += 1,
            PriorityTier::Haute => entree.hautes += 1,
            PriorityTier::Moyenne => entree.moyennes += 1,
            PriorityTier::Basse => entree.basses += 1,
        }
        entree.total += 1;
        if analyse.est_recurrent {
            entree.recurrents += 1;
        }
    }

    // Tri stable : les égalités gardent l'ordre de première apparition.
    stats.sort_by(|a, b| b.total.cmp(&a.total));

    Ok(stats)
}

/// Extrait de résumé, coupe franche à `LONGUEUR_EXTRAIT` caractères
/// (jamais au milieu d'un caractère, pas de points de suspension).
fn extraire(resume: &str) -> String {
    resume.chars().take(LONGUEUR_EXTRAIT).collect()
}

fn build_problemes_critiques(analyses: &[AnalysisRecord]) -> Vec<CriticalIssue> {
    analyses
        .iter()
        .filter(|a| a.priorite == PriorityTier::Critique)
        .take(MAX_PROBLEMES_CRITIQUES)
        .map(|a| CriticalIssue {
            ticket_code: a.ticket_code.clone(),
            service: a.service.clone(),
            extrait: extraire(&a.resume),
        })
        .collect()
}

/// Recommandations, dans l'ordre d'émission :
/// 1. un avertissement par service dépassant strictement
///    `SEUIL_ALERTE_CRITIQUES` tickets critiques, dans l'ordre des stats ;
/// 2. une ligne listant les catégories touchées par des incidents
///    récurrents, s'il y en a ;
/// 3. une ligne générique si au moins une analyse demande une escalade.
fn build_recommandations(stats: &[DepartmentStats], analyses: &[AnalysisRecord]) -> Vec<String> {
    let mut recommandations = Vec::new();

    for entree in stats {
        if entree.critiques > SEUIL_ALERTE_CRITIQUES {
            recommandations.push(format!(
                "Le service {} concentre {} tickets critiques : prévoir un renfort ou une action préventive.",
                entree.service, entree.critiques
            ));
        }
    }

    // BTreeSet sur l'enum : dédoublonnage + ordre canonique des catégories.
    let categories_recurrentes: BTreeSet<IncidentCategory> = analyses
        .iter()
        .filter(|a| a.est_recurrent)
        .map(|a| a.categorie)
        .collect();
    if !categories_recurrentes.is_empty() {
        let libelles: Vec<&str> = categories_recurrentes.iter().map(|c| c.label()).collect();
        recommandations.push(format!(
            "Incidents récurrents détectés dans les catégories : {}. Une résolution de fond est recommandée.",
            libelles.join(", ")
        ));
    }

    if analyses.iter().any(|a| a.escalade_necessaire) {
        recommandations.push(
            "Des tickets requièrent une escalade : vérifier la disponibilité des experts."
                .to_string(),
        );
    }

    recommandations
}

/// Synthèse quotidienne du lot : datée du jour, statistiques par service,
/// extraits critiques (5 au plus, dans l'ordre d'entrée) et recommandations.
pub fn build_daily_summary(
    tickets: &[TicketRecord],
    analyses: &[AnalysisRecord],
) -> Result<DailySummary, AppError> {
    let stats_par_service = build_department_stats(tickets, analyses)?;
    let problemes_critiques = build_problemes_critiques(analyses);
    let recommandations = build_recommandations(&stats_par_service, analyses);
    let incidents_recurrents = analyses.iter().filter(|a| a.est_recurrent).count();

    Ok(DailySummary {
        date: Local::now().date_naive(),
        total_tickets: analyses.len(),
        stats_par_service,
        incidents_recurrents,
        problemes_critiques,
        recommandations,
    })
}
