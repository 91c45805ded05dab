// src/noyau/format.rs

/// Au-delà de ce plafond (strictement), l'écran bascule en notation
/// exponentielle. Les grands négatifs restent groupés.
const PLAFOND_GROUPE: f64 = 999_999_999.0;

/// Plafonds d'écran : chiffres significatifs et décimales.
const MAX_SIGNIFICATIFS: i32 = 9;
const MAX_DECIMALES: i32 = 9;

/* ------------------------ Écran ------------------------ */

/// Formate une valeur pour l'écran :
/// - au-delà de 999 999 999 : notation exponentielle ("1.23456789e9") ;
///   +inf prend cette branche et s'affiche "inf"
/// - NaN / -inf : rendu standard tel quel
/// - sinon : arrondi aux plafonds d'écran, puis groupement des milliers
pub fn format_pour_affichage(x: f64) -> String {
    if x > PLAFOND_GROUPE {
        return format!("{x:e}");
    }
    if !x.is_finite() {
        return x.to_string();
    }
    grouper_milliers(&arrondir_pour_ecran(x).to_string())
}

/// Compte les chiffres affichés (séparateurs et point exclus).
/// Le signe compte pour un caractère.
pub fn nb_chiffres(texte: &str) -> usize {
    texte.chars().filter(|&c| !matches!(c, ',' | '.')).count()
}

/// Relit l'écran en f64, séparateurs de milliers ignorés.
/// Rend NaN si le texte n'est pas un nombre.
pub fn vers_f64(texte: &str) -> f64 {
    texte.replace(',', "").parse().unwrap_or(f64::NAN)
}

/* ------------------------ Arrondi d'écran ------------------------ */

/// Arrondit aux plafonds d'écran : au plus 9 chiffres significatifs
/// ET au plus 9 décimales (la contrainte la plus stricte gagne).
/// Règle d'arrondi : moitié loin de zéro, une seule fois, à la
/// position permise. Le zéro rendu est toujours +0.
fn arrondir_pour_ecran(x: f64) -> f64 {
    let decimales = MAX_DECIMALES.min(MAX_SIGNIFICATIFS - chiffres_entiers(x));
    let arrondi = arrondir_a(x, decimales);
    if arrondi == 0.0 {
        return 0.0; // couvre -0, saisi ou issu de l'arrondi : l'écran montre "0"
    }
    arrondi
}

/// Nombre de chiffres de la partie entière (0 si |x| < 1, signe ignoré).
fn chiffres_entiers(x: f64) -> i32 {
    let tronque = x.abs().trunc();
    if tronque < 1.0 {
        return 0;
    }
    format!("{tronque:.0}").len() as i32
}

/// Arrondi à `decimales` décimales ; négatif = dizaines, centaines, etc.
/// (cas des grands négatifs, que le plafond exponentiel ne capte pas).
fn arrondir_a(x: f64, decimales: i32) -> f64 {
    let echelle = 10f64.powi(decimales.abs());
    if decimales >= 0 {
        (x * echelle).round() / echelle
    } else {
        (x / echelle).round() * echelle
    }
}

/* ------------------------ Groupement des milliers ------------------------ */

/// Insère une virgule tous les 3 chiffres dans la partie entière.
/// Le signe et la partie décimale passent tels quels.
fn grouper_milliers(texte: &str) -> String {
    let (signe, reste) = match texte.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", texte),
    };

    let (entier, decimales) = match reste.split_once('.') {
        Some((e, d)) => (e, Some(d)),
        None => (reste, None),
    };

    let mut inverse = String::new();
    for (i, c) in entier.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            inverse.push(',');
        }
        inverse.push(c);
    }
    let groupe: String = inverse.chars().rev().collect();

    match decimales {
        Some(d) => format!("{signe}{groupe}.{d}"),
        None => format!("{signe}{groupe}"),
    }
}

/* ------------------------ tests ------------------------ */
