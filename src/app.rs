// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer le sous-module vue.rs
// - Porter AppCalc (un moteur indépendant par session)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Aucune logique calculatrice ici : chaque clic envoie UNE commande
//   au moteur, puis la vue relit l'écran. Rien d'autre ne circule.

pub mod vue;

use eframe::egui;

use crate::noyau::Moteur;

/// État applicatif : le moteur de saisie, et rien d'autre.
#[derive(Debug, Default)]
pub struct AppCalc {
    moteur: Moteur,
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
