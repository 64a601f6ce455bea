//! Este modulo contiene funciones generales para el manejo de comandos
use crate::constantes::{ERROR_VALOR_NO_ENTERO, ERROR_VALOR_NO_FLOTANTE};
use crate::tipos::dato::Dato;

/// Determina si la cantidad de argumentos recibida alcanza para el
/// comando y lanza un error si no alcanza
///
/// # Parametros
/// * `comando`: nombre del comando que se valida
/// * `esperado`: cantidad minima de argumentos
/// * `largo`: cantidad real de argumentos
///
/// # Retorna
/// - () si alcanza, error de comando en otro caso
pub fn assert_cantidad_argumentos(
    comando: &str,
    esperado: usize,
    largo: usize,
) -> Result<(), Dato> {
    if largo < esperado {
        return Err(Dato::new_error(&format!(
            "wrong number of arguments for '{comando}' command"
        )));
    }
    Ok(())
}

/// Determina si la cantidad de argumentos recibida es exactamente
/// la esperada y lanza un error si no coincide
///
/// # Parametros
/// * `comando`: nombre del comando que se valida
/// * `esperado`: cantidad exacta de argumentos
/// * `largo`: cantidad real de argumentos
pub fn assert_cantidad_argumentos_exacta(
    comando: &str,
    esperado: usize,
    largo: usize,
) -> Result<(), Dato> {
    if largo != esperado {
        return Err(Dato::new_error(&format!(
            "wrong number of arguments for '{comando}' command"
        )));
    }
    Ok(())
}

/// Interpreta un token como indice con signo
pub fn parse_indice(token: &str) -> Result<isize, Dato> {
    token
        .parse()
        .map_err(|_| Dato::new_error(ERROR_VALOR_NO_ENTERO))
}

/// Interpreta un token como entero de 64 bits
pub fn parse_entero(token: &str) -> Result<i64, Dato> {
    token
        .parse()
        .map_err(|_| Dato::new_error(ERROR_VALOR_NO_ENTERO))
}

/// Interpreta un token como flotante de 64 bits
pub fn parse_flotante(token: &str) -> Result<f64, Dato> {
    token
        .parse()
        .map_err(|_| Dato::new_error(ERROR_VALOR_NO_FLOTANTE))
}

/// Ajusta un par de indices a valores indexables sobre una
/// coleccion de largo conocido. Los indices negativos se cuentan
/// desde el final; el indice de fin es exclusivo y cualquier fin
/// negativo se interpreta como el largo total
///
/// # Parametros
/// * `inicio`: indice de inicio deseado
/// * `fin`: indice de fin deseado
/// * `largo`: largo de la coleccion a indexar
///
/// # Retorna
/// - Tupla (inicio, fin) acotada al rango valido
pub fn ajustar_indices(mut inicio: isize, mut fin: isize, largo: isize) -> (usize, usize) {
    if inicio < 0 && fin >= 0 {
        return (0, 0);
    }

    if inicio < 0 {
        inicio += largo;
    }

    if fin < 0 {
        fin = largo;
    }

    let inicio = inicio.clamp(0, largo) as usize;
    let fin = fin.clamp(0, largo) as usize;

    (inicio, fin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cantidad_minima_de_argumentos() {
        assert!(assert_cantidad_argumentos("set", 2, 2).is_ok());
        assert!(assert_cantidad_argumentos("set", 2, 3).is_ok());
        let error = assert_cantidad_argumentos("set", 2, 1).unwrap_err();
        assert!(error.a_linea().contains("'set'"));
    }

    #[test]
    fn test_cantidad_exacta_de_argumentos() {
        assert!(assert_cantidad_argumentos_exacta("strlen", 0, 0).is_ok());
        assert!(assert_cantidad_argumentos_exacta("strlen", 0, 1).is_err());
    }

    #[test]
    fn test_parse_entero_invalido() {
        assert!(parse_entero("12").is_ok());
        assert!(parse_entero("doce").is_err());
    }

    #[test]
    fn test_ajustar_indices_positivos() {
        assert_eq!(ajustar_indices(0, 3, 6), (0, 3));
        assert_eq!(ajustar_indices(2, 10, 6), (2, 6));
    }

    #[test]
    fn test_ajustar_indices_negativos() {
        // fin negativo equivale al largo total
        assert_eq!(ajustar_indices(0, -1, 6), (0, 6));
        assert_eq!(ajustar_indices(-2, -1, 6), (4, 6));
        // inicio negativo con fin positivo es un rango vacio
        assert_eq!(ajustar_indices(-1, 3, 6), (0, 0));
    }
}
