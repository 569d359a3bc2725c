//! Lexiques de classification — configuration immuable injectée dans le
//! classifieur à la construction. Les valeurs par défaut couvrent le
//! vocabulaire help-desk français observé dans les tickets.

use crate::types::{IncidentCategory, PriorityTier};

/// Tables de mots-clés. Toutes les expressions sont en minuscules :
/// la recherche se fait par sous-chaîne sur le texte du ticket passé
/// en minuscules.
#[derive(Debug, Clone)]
pub struct Lexique {
    pub categories: Vec<(IncidentCategory, Vec<String>)>,
    /// Parcourue de Critique vers Basse, premier niveau reconnu retenu.
    pub priorites: Vec<(PriorityTier, Vec<String>)>,
    /// Termes de portée multi-utilisateurs (heuristique d'impact).
    pub termes_multi_postes: Vec<String>,
    /// Termes d'impact production/client (heuristique d'urgence).
    pub termes_production: Vec<String>,
    /// Valeur canonique du statut "ouvert" (repli de priorité).
    pub statut_ouvert: String,
}

fn vers_strings(mots: &[&str]) -> Vec<String> {
    mots.iter().map(|m| m.to_string()).collect()
}

impl Default for Lexique {
    fn default() -> Self {
        Lexique {
            categories: vec![
                (
                    IncidentCategory::Reseau,
                    vers_strings(&[
                        "réseau", "wifi", "connexion", "internet", "vpn", "serveur", "panne",
                        "proxy", "déconnexion",
                    ]),
                ),
                (
                    IncidentCategory::Materiel,
                    vers_strings(&[
                        "ordinateur", "poste", "écran", "imprimante", "clavier", "souris",
                        "disque", "batterie", "matériel",
                    ]),
                ),
                (
                    IncidentCategory::Logiciel,
                    vers_strings(&[
                        "logiciel", "application", "installation", "mise à jour", "licence",
                        "plantage", "bug",
                    ]),
                ),
                (
                    IncidentCategory::Acces,
                    vers_strings(&[
                        "mot de passe", "accès refusé", "compte", "identifiant", "verrouillé",
                        "droits", "habilitation",
                    ]),
                ),
                (
                    IncidentCategory::Messagerie,
                    vers_strings(&[
                        "mail", "e-mail", "courriel", "messagerie", "outlook", "boîte de réception",
                        "pièce jointe",
                    ]),
                ),
                (
                    IncidentCategory::Securite,
                    vers_strings(&[
                        "virus", "phishing", "hameçonnage", "piratage", "malware", "suspect",
                        "sécurité",
                    ]),
                ),
                (
                    IncidentCategory::Donnees,
                    vers_strings(&[
                        "fichier", "dossier", "sauvegarde", "restauration", "perte de données",
                        "corrompu", "supprimé",
                    ]),
                ),
                (
                    IncidentCategory::Performance,
                    vers_strings(&[
                        "lenteur", "ralentissement", "performance", "saturé", "freeze", "rame",
                    ]),
                ),
            ],
            priorites: vec![
                (
                    PriorityTier::Critique,
                    vers_strings(&[
                        "panne totale", "bloquant", "production arrêtée", "plus rien ne fonctionne",
                        "tous les postes", "critique",
                    ]),
                ),
                (
                    PriorityTier::Haute,
                    vers_strings(&[
                        "urgent", "impossible de travailler", "panne", "bloqué", "important",
                    ]),
                ),
                (
                    PriorityTier::Moyenne,
                    vers_strings(&["problème", "dysfonctionnement", "erreur", "gênant"]),
                ),
                (
                    PriorityTier::Basse,
                    vers_strings(&["question", "demande d'information", "amélioration", "quand possible"]),
                ),
            ],
            termes_multi_postes: vers_strings(&[
                "plusieurs", "tous les", "toute l'équipe", "équipe", "service entier",
                "département", "collègues",
            ]),
            termes_production: vers_strings(&["production", "client", "critique", "urgent"]),
            statut_ouvert: "ouvert".to_string(),
        }
    }
}

impl Lexique {
    /// Mots-clés d'une catégorie, liste vide si la catégorie n'en a pas.
    pub fn mots_categorie(&self, categorie: IncidentCategory) -> &[String] {
        self.categories
            .iter()
            .find(|(c, _)| *c == categorie)
            .map(|(_, mots)| mots.as_slice())
            .unwrap_or(&[])
    }
}
