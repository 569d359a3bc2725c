use crate::config::Lexique;
use crate::types::PriorityTier;

/// Dérive les axes urgence/impact à partir de la priorité et du texte.
/// Les deux heuristiques sont indépendantes, peuvent se cumuler et ne
/// font jamais baisser un niveau.
///
/// - Portée multi-postes (plusieurs utilisateurs, équipe, service) :
///   l'impact monte d'un cran.
/// - Impact production/client : l'urgence passe à Haute si elle était
///   Basse, à Critique sinon.
pub fn deriver_triage(
    priorite: PriorityTier,
    texte: &str,
    lexique: &Lexique,
) -> (PriorityTier, PriorityTier) {
    let mut urgence = priorite;
    let mut impact = priorite;

    if lexique
        .termes_multi_postes
        .iter()
        .any(|terme| texte.contains(terme.as_str()))
    {
        impact = impact.bump();
    }

    if lexique
        .termes_production
        .iter()
        .any(|terme| texte.contains(terme.as_str()))
    {
        urgence = if urgence == PriorityTier::Basse {
            PriorityTier::Haute
        } else {
            PriorityTier::Critique
        };
    }

    (urgence, impact)
}
