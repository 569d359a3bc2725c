use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Ticket tel que fourni par le service de récupération externe.
/// Le champ `service` sert de clé de regroupement, utilisé tel quel
/// (deux orthographes distinctes = deux services distincts).
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRecord {
    pub id: i64,
    pub code: String,
    pub prenom: String,
    pub nom: String,
    pub service: String,
    pub motif: String,
    pub description: String,
    pub statut: String,
    /// ISO `YYYY-MM-DDTHH:MM:SS`. Un horodatage non conforme fait échouer l'analyse.
    pub date_creation: String,
}

/// Catégories d'incident. L'ordre de déclaration est l'ordre canonique :
/// il sert de départage en cas d'égalité de score dans le classifieur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IncidentCategory {
    Reseau,
    Materiel,
    Logiciel,
    Acces,
    Messagerie,
    Securite,
    Donnees,
    Performance,
    Autre,
}

impl IncidentCategory {
    /// Les catégories dans l'ordre canonique, `Autre` exclue (jamais scorée).
    pub const SCORABLES: [IncidentCategory; 8] = [
        IncidentCategory::Reseau,
        IncidentCategory::Materiel,
        IncidentCategory::Logiciel,
        IncidentCategory::Acces,
        IncidentCategory::Messagerie,
        IncidentCategory::Securite,
        IncidentCategory::Donnees,
        IncidentCategory::Performance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IncidentCategory::Reseau => "Réseau",
            IncidentCategory::Materiel => "Matériel",
            IncidentCategory::Logiciel => "Logiciel",
            IncidentCategory::Acces => "Accès",
            IncidentCategory::Messagerie => "Messagerie",
            IncidentCategory::Securite => "Sécurité",
            IncidentCategory::Donnees => "Données",
            IncidentCategory::Performance => "Performance",
            IncidentCategory::Autre => "Autre",
        }
    }
}

impl std::fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Niveaux de priorité ordonnés : Basse < Moyenne < Haute < Critique.
/// Le même barème sert aux axes urgence et impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PriorityTier {
    Basse,
    Moyenne,
    Haute,
    Critique,
}

impl PriorityTier {
    pub const ALL: [PriorityTier; 4] = [
        PriorityTier::Basse,
        PriorityTier::Moyenne,
        PriorityTier::Haute,
        PriorityTier::Critique,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::Basse => "Basse",
            PriorityTier::Moyenne => "Moyenne",
            PriorityTier::Haute => "Haute",
            PriorityTier::Critique => "Critique",
        }
    }

    /// Monte d'un cran sur le barème. Critique reste Critique.
    pub fn bump(self) -> PriorityTier {
        match self {
            PriorityTier::Basse => PriorityTier::Moyenne,
            PriorityTier::Moyenne => PriorityTier::Haute,
            PriorityTier::Haute | PriorityTier::Critique => PriorityTier::Critique,
        }
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Résultat d'analyse d'un ticket. Immuable après création, une instance
/// par ticket d'entrée. Porte les références (id, code, service) vers le
/// ticket source : l'agrégation s'appuie sur `ticket_id`, jamais sur la
/// position dans la liste.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub ticket_id: i64,
    pub ticket_code: String,
    pub service: String,
    pub categorie: IncidentCategory,
    pub priorite: PriorityTier,
    pub urgence: PriorityTier,
    pub impact: PriorityTier,
    pub resume: String,
    pub solutions_proposees: Vec<String>,
    pub etapes_resolution: Vec<String>,
    pub competences_requises: Vec<String>,
    /// Toujours `false` : la détection de récurrence sur l'historique
    /// n'est pas implémentée. Voir analyzer::mod.
    pub est_recurrent: bool,
    pub temps_resolution_estime: String,
    pub escalade_necessaire: bool,
    /// Réservé, jamais alimenté par le moteur actuel.
    pub tickets_lies: Vec<i64>,
    pub date_analyse: NaiveDateTime,
}

/// Comptages par service, ventilés par niveau de priorité.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub service: String,
    pub critiques: usize,
    pub hautes: usize,
    pub moyennes: usize,
    pub basses: usize,
    pub total: usize,
    pub recurrents: usize,
    /// Non calculé par le moteur actuel (réservé).
    pub temps_resolution_moyen: Option<f64>,
    /// Non calculé par le moteur actuel (réservé).
    pub problemes_frequents: Vec<String>,
}

impl DepartmentStats {
    pub fn new(service: String) -> Self {
        DepartmentStats {
            service,
            critiques: 0,
            hautes: 0,
            moyennes: 0,
            basses: 0,
            total: 0,
            recurrents: 0,
            temps_resolution_moyen: None,
            problemes_frequents: Vec::new(),
        }
    }
}

/// Extrait d'un ticket critique repris dans la synthèse quotidienne.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalIssue {
    pub ticket_code: String,
    pub service: String,
    /// Résumé tronqué à 100 caractères, coupe franche sans points de suspension.
    pub extrait: String,
}

/// Synthèse quotidienne d'un lot d'analyses. Construite une fois par
/// exécution, jamais mise à jour incrémentalement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_tickets: usize,
    pub stats_par_service: Vec<DepartmentStats>,
    pub incidents_recurrents: usize,
    pub problemes_critiques: Vec<CriticalIssue>,
    pub recommandations: Vec<String>,
}

/// Fixture partagée par les tests des différents modules.
#[cfg(test)]
pub fn ticket_de_test(id: i64) -> TicketRecord {
    TicketRecord {
        id,
        code: format!("TK-{id:04}"),
        prenom: "Marie".to_string(),
        nom: "Dupont".to_string(),
        service: "Comptabilité".to_string(),
        motif: "Test".to_string(),
        description: String::new(),
        statut: "ouvert".to_string(),
        date_creation: "2026-08-28T09:30:00".to_string(),
    }
}
