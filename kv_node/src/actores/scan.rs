//! Este modulo contiene el motor de scan con cursor y patron glob,
//! compartido por scan, hscan y sscan
use crate::constantes::{CANTIDAD_SCAN_DEFAULT, CURSOR_DEFAULT, ERROR_PATRON, PATRON_DEFAULT};
use crate::tipos::dato::Dato;
use glob::Pattern;

use super::utils::parse_entero;

/// Recorre una coleccion con cursor y filtro glob.
///
/// Los argumentos posicionales son `cursor` (default 0), `patron`
/// (default `*`) y `cantidad` (default 10). Se filtran los elementos
/// que matchean el patron y se devuelve la ventana
/// `[cursor, cursor + cantidad)` precedida por el proximo cursor,
/// que vale 0 cuando la iteracion termino
///
/// # Parametros
/// * `elementos`: iterador sobre la coleccion subyacente
/// * `argumentos`: argumentos posicionales del comando
///
/// # Retorna
/// - Lista con el proximo cursor seguido de los elementos de la
///   ventana, error de comando ante cursor o patron invalidos
pub fn escanear<'a, I>(elementos: I, argumentos: &[String]) -> Result<Dato, Dato>
where
    I: Iterator<Item = &'a String>,
{
    let cursor = match argumentos.first() {
        Some(token) => parse_entero(token)? as usize,
        None => CURSOR_DEFAULT,
    };
    let patron_texto = argumentos
        .get(1)
        .map(String::as_str)
        .unwrap_or(PATRON_DEFAULT);
    let cantidad = match argumentos.get(2) {
        Some(token) => parse_entero(token)? as usize,
        None => CANTIDAD_SCAN_DEFAULT,
    };

    let patron = Pattern::new(patron_texto).map_err(|_| Dato::new_error(ERROR_PATRON))?;
    let filtrados: Vec<&String> = elementos.filter(|e| patron.matches(e)).collect();

    let inicio = cursor.min(filtrados.len());
    let fin = cursor.saturating_add(cantidad).min(filtrados.len());
    let proximo_cursor = if fin < filtrados.len() { fin } else { 0 };

    let mut respuesta = Vec::with_capacity(fin - inicio + 1);
    respuesta.push(proximo_cursor.to_string());
    for elemento in &filtrados[inicio..fin] {
        respuesta.push((*elemento).to_string());
    }

    Ok(Dato::new_lista(respuesta))
}
