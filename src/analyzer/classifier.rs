use crate::config::Lexique;
use crate::types::{IncidentCategory, PriorityTier, TicketRecord};

/// Classifieur catégorie + priorité. Le lexique est injecté à la
/// construction, ce qui permet de le remplacer en test.
#[derive(Debug, Clone)]
pub struct Classifier {
    lexique: Lexique,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(Lexique::default())
    }
}

impl Classifier {
    pub fn new(lexique: Lexique) -> Self {
        Classifier { lexique }
    }

    pub fn lexique(&self) -> &Lexique {
        &self.lexique
    }

    /// Texte combiné motif + description, en minuscules.
    pub fn texte_combine(ticket: &TicketRecord) -> String {
        format!("{} {}", ticket.motif, ticket.description).to_lowercase()
    }

    /// Catégorie = meilleur score de mots-clés sur le texte combiné.
    /// Score nul partout → `Autre`. En cas d'égalité, la première catégorie
    /// de l'ordre canonique gagne (comparaison stricte `>`), ce qui rend le
    /// résultat déterministe.
    pub fn inferer_categorie(&self, texte: &str) -> IncidentCategory {
        let mut meilleure = IncidentCategory::Autre;
        let mut meilleur_score = 0usize;

        for categorie in IncidentCategory::SCORABLES {
            let score = self
                .lexique
                .mots_categorie(categorie)
                .iter()
                .filter(|mot| texte.contains(mot.as_str()))
                .count();
            if score > meilleur_score {
                meilleur_score = score;
                meilleure = categorie;
            }
        }

        meilleure
    }

    /// Priorité = parcours des niveaux de Critique vers Basse, premier
    /// niveau dont un mot-clé apparaît dans le texte. Aucun mot reconnu →
    /// repli sur le statut : Moyenne si le ticket est ouvert, Basse sinon.
    pub fn inferer_priorite(&self, texte: &str, statut: &str) -> PriorityTier {
        for (niveau, mots) in &self.lexique.priorites {
            if mots.iter().any(|mot| texte.contains(mot.as_str())) {
                return *niveau;
            }
        }

        if statut.trim().to_lowercase() == self.lexique.statut_ouvert {
            PriorityTier::Moyenne
        } else {
            PriorityTier::Basse
        }
    }
}
