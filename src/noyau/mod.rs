//! Noyau de la calculatrice de poche
//!
//! Organisation interne :
//! - touches.rs : alphabet des touches (chiffres, point, opérateurs, "=")
//! - moteur.rs  : machine à états de saisie (écran, opérande, attente)
//! - format.rs  : écran décimal (groupage, plafonds, exponentielle)

pub mod format;
pub mod moteur;
pub mod touches;


#[cfg(test)]
mod tests_frappe_safe;

// API publique minimale
pub use moteur::Moteur;
pub use touches::{Operateur, Saisie, ToucheOperation};
