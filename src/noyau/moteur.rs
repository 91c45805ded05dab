//! Noyau — moteur de saisie (machine à états)
//!
//! Un seul enregistrement d'état (écran, opérande gauche, opération en
//! attente, saisie neuve), muté d'un bloc par commande :
//! saisir / choisir_operation / clear. La vue relit l'écran après
//! chaque commande, rien d'autre.
//!
//! Remarque : aucune commande n'échoue. Les cas numériquement
//! dégénérés (10/0, 0/0) passent en IEEE-754 (±inf, NaN) et suivent
//! le circuit normal jusqu'à l'écran.

use super::format::{format_pour_affichage, nb_chiffres, vers_f64};
use super::touches::{Operateur, Saisie, ToucheOperation};

/// Garde-fou : une valeur saisie à la main porte au plus 9 chiffres.
const PLAFOND_SAISIE: usize = 9;

#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    /// Texte exact de l'écran : jamais vide, au plus un point.
    affichage: String,
    /// Opérande gauche du prochain calcul, figé quand la saisie
    /// reprend après un opérateur.
    operande_gauche: f64,
    /// Opération en attente ; None = repos (rien à calculer).
    op_en_attente: Option<Operateur>,
    /// Vrai juste après un opérateur ou "=" : la prochaine saisie
    /// démarre une nouvelle valeur au lieu d'allonger l'écran.
    saisie_neuve: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            operande_gauche: 0.0,
            op_en_attente: None,
            saisie_neuve: false,
        }
    }
}

impl Moteur {
    /* ------------------------ Lectures ------------------------ */

    /// Texte de l'écran, à relire après chaque commande.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Vrai si `op` vient d'être choisie et attend son opérande droit.
    /// Sert au surlignage du bouton, jamais au comportement.
    pub fn est_en_attente(&self, op: Operateur) -> bool {
        self.op_en_attente == Some(op) && self.saisie_neuve
    }

    /* ------------------------ Commandes ------------------------ */

    /// Touche chiffre ou point.
    pub fn saisir(&mut self, saisie: Saisie) {
        // Plafond : la touche est ignorée une fois les 9 chiffres
        // atteints (sauf si une nouvelle valeur démarre).
        if nb_chiffres(&self.affichage) >= PLAFOND_SAISIE && !self.saisie_neuve {
            return;
        }

        // Nouvelle valeur : l'écran courant est figé comme opérande
        // gauche, puis la saisie repart de "0".
        if self.saisie_neuve {
            self.operande_gauche = vers_f64(&self.affichage);
            self.affichage = "0".to_string();
            self.saisie_neuve = false;
        }

        match saisie {
            Saisie::Point => {
                // au plus un point ; ajouté SANS reformater, pour que
                // le point final survive ("3." reste "3.")
                if !self.affichage.contains('.') {
                    self.affichage.push('.');
                }
            }
            Saisie::Chiffre(c) => {
                let c = c.min(9); // garde-fou
                let candidat = format!("{}{c}", self.affichage);
                self.affichage = format_pour_affichage(vers_f64(&candidat));
            }
        }
    }

    /// Touche opérateur ou "=".
    pub fn choisir_operation(&mut self, touche: ToucheOperation) {
        // Changement d'avis : un opérateur déjà choisi, aucune saisie
        // depuis -> on remplace l'opération sans rien calculer.
        if self.saisie_neuve {
            self.op_en_attente = touche.operateur();
            return;
        }

        // Une opération attend son opérande droit : on la résout.
        if let Some(op) = self.op_en_attente {
            let droite = vers_f64(&self.affichage);
            self.affichage = format_pour_affichage(op.appliquer(self.operande_gauche, droite));
        }

        // L'écran courant deviendra l'opérande gauche dès que la
        // saisie reprendra.
        self.saisie_neuve = true;
        self.op_en_attente = touche.operateur();
    }

    /// Touche "C" : retour complet à l'état initial.
    pub fn clear(&mut self) {
        *self = Moteur::default();
    }
}

/* ------------------------ tests ------------------------ */
