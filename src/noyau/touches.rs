// src/noyau/touches.rs

/// Une touche de saisie du pavé : chiffre ou point décimal.
/// Le pavé ne peut construire que des variantes valides ; le moteur
/// n'a donc jamais de caractère à rejeter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saisie {
    Chiffre(u8),
    Point,
}

/// Les 4 opérations binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Applique l'opération en arithmétique f64 (IEEE-754).
    /// Totale : la division par zéro rend ±inf ou NaN, jamais une erreur.
    pub fn appliquer(self, gauche: f64, droite: f64) -> f64 {
        match self {
            Operateur::Plus => gauche + droite,
            Operateur::Moins => gauche - droite,
            Operateur::Fois => gauche * droite,
            Operateur::Divise => gauche / droite,
        }
    }

    /// Étiquette du bouton correspondant sur le pavé.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
        }
    }
}

/// Une touche "opération" : un des 4 opérateurs, ou "=".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToucheOperation {
    Op(Operateur),
    Egal,
}

impl ToucheOperation {
    /// Opérateur à mettre en attente après la touche.
    /// "=" ramène à l'état de repos : None (rien en attente).
    pub fn operateur(self) -> Option<Operateur> {
        match self {
            ToucheOperation::Op(op) => Some(op),
            ToucheOperation::Egal => None,
        }
    }
}
