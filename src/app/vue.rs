// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - un écran lecture seule + la rangée C / = + le pavé 4 colonnes
// - chaque clic = exactement une commande du moteur
// - l'opérateur en attente reste surligné jusqu'à la reprise de saisie

use eframe::egui;

use super::AppCalc;
use crate::noyau::{Operateur, Saisie, ToucheOperation};

/// Taille unique des touches.
const TAILLE_TOUCHE: [f32; 2] = [56.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);
        ui.add_space(6.0);
        self.ui_actions(ui);
        ui.add_space(2.0);
        self.ui_pave(ui);
    }

    /// Écran : cadre sombre, texte monospace aligné à droite.
    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.moteur.affichage())
                            .monospace()
                            .size(28.0),
                    );
                });
            });
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let c = ui
                .add_sized(TAILLE_TOUCHE, egui::Button::new("C"))
                .on_hover_text("Remise à zéro totale");
            if c.clicked() {
                self.moteur.clear();
            }

            let eq = ui.add_sized(TAILLE_TOUCHE, egui::Button::new("="));
            if eq.clicked() {
                self.moteur.choisir_operation(ToucheOperation::Egal);
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_saisie(ui, "7", Saisie::Chiffre(7));
                self.bouton_saisie(ui, "8", Saisie::Chiffre(8));
                self.bouton_saisie(ui, "9", Saisie::Chiffre(9));
                self.bouton_operateur(ui, Operateur::Plus);
                ui.end_row();

                self.bouton_saisie(ui, "4", Saisie::Chiffre(4));
                self.bouton_saisie(ui, "5", Saisie::Chiffre(5));
                self.bouton_saisie(ui, "6", Saisie::Chiffre(6));
                self.bouton_operateur(ui, Operateur::Moins);
                ui.end_row();

                self.bouton_saisie(ui, "1", Saisie::Chiffre(1));
                self.bouton_saisie(ui, "2", Saisie::Chiffre(2));
                self.bouton_saisie(ui, "3", Saisie::Chiffre(3));
                self.bouton_operateur(ui, Operateur::Fois);
                ui.end_row();

                self.bouton_saisie(ui, "0", Saisie::Chiffre(0));
                self.bouton_saisie(ui, ".", Saisie::Point);
                ui.label("");
                self.bouton_operateur(ui, Operateur::Divise);
                ui.end_row();
            });
    }

    fn bouton_saisie(&mut self, ui: &mut egui::Ui, label: &str, saisie: Saisie) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if resp.clicked() {
            self.moteur.saisir(saisie);
        }
    }

    /// Bouton opérateur : surligné tant que l'opération attend son
    /// opérande droit.
    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        let bouton = egui::Button::new(op.symbole()).selected(self.moteur.est_en_attente(op));
        let resp = ui.add_sized(TAILLE_TOUCHE, bouton);
        if resp.clicked() {
            self.moteur.choisir_operation(ToucheOperation::Op(op));
        }
    }
}
