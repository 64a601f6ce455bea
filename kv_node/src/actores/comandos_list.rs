//! Este modulo contiene la implementacion de los comandos para
//! los actores de tipo lista
use crate::constantes::{ERROR_INDICE, NO_IMPLEMENTADO, OPERACION_EXITOSA};
use crate::registro::const_cmd::*;
use crate::registro::registro_actores::Registro;
use crate::registro::registro_comandos::TipoNodo;
use crate::tipos::dato::Dato;
use std::collections::VecDeque;

use super::mensaje::Payload;
use super::utils::{ajustar_indices, assert_cantidad_argumentos, parse_indice};

/// Despacha un comando de lista sobre los elementos del actor
///
/// # Parametros
/// * `payload`: pedido a ejecutar
/// * `elementos`: estado del actor
/// * `registro`: registro de actores, usado por rpoplpush para
///   alcanzar la lista destino
///
/// # Retorna
/// - Respuesta del comando, error de comando en otro caso
pub fn ejecutar(
    payload: &Payload,
    elementos: &mut VecDeque<String>,
    registro: &Registro,
) -> Result<Dato, Dato> {
    let argumentos = payload.argumentos();
    match payload.comando() {
        CMD_LPUSH | CMD_LPUSHX => lpush(argumentos, elementos),
        CMD_RPUSH | CMD_RPUSHX => rpush(argumentos, elementos),
        CMD_LPOP => lpop(elementos),
        CMD_RPOP => rpop(elementos),
        CMD_LLEN => llen(elementos),
        CMD_LSET => lset(argumentos, elementos),
        CMD_LINDEX => lindex(argumentos, elementos),
        CMD_LREM => lrem(argumentos, elementos),
        CMD_LRANGE => lrange(argumentos, elementos),
        CMD_LTRIM => ltrim(argumentos, elementos),
        CMD_LINSERT => linsert(argumentos, elementos),
        CMD_RPOPLPUSH => rpoplpush(argumentos, elementos, registro),
        CMD_BLPOP | CMD_BRPOP | CMD_BRPOPLPUSH => Ok(Dato::new_texto(NO_IMPLEMENTADO)),
        otro => Err(Dato::new_error(&format!(
            "command '{otro}' is not a list command"
        ))),
    }
}

/// Inserta los elementos recibidos al inicio de la lista, en el
/// orden en que llegan
///
/// # Parametros
/// * `argumentos`: elementos a insertar
/// * `elementos`: estado del actor
///
/// # Retorna
/// - El nuevo largo de la lista
pub fn lpush(argumentos: &[String], elementos: &mut VecDeque<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_LPUSH, 1, argumentos.len())?;
    for elemento in argumentos {
        elementos.push_front(elemento.to_string());
    }
    Ok(Dato::new_entero(elementos.len() as i64))
}

/// Inserta los elementos recibidos al final de la lista
///
/// # Retorna
/// - El nuevo largo de la lista
pub fn rpush(argumentos: &[String], elementos: &mut VecDeque<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_RPUSH, 1, argumentos.len())?;
    for elemento in argumentos {
        elementos.push_back(elemento.to_string());
    }
    Ok(Dato::new_entero(elementos.len() as i64))
}

/// Remueve y devuelve el primer elemento, nulo si la lista esta vacia
pub fn lpop(elementos: &mut VecDeque<String>) -> Result<Dato, Dato> {
    match elementos.pop_front() {
        Some(elemento) => Ok(Dato::Texto(elemento)),
        None => Ok(Dato::new_nulo()),
    }
}

/// Remueve y devuelve el ultimo elemento, nulo si la lista esta vacia
pub fn rpop(elementos: &mut VecDeque<String>) -> Result<Dato, Dato> {
    match elementos.pop_back() {
        Some(elemento) => Ok(Dato::Texto(elemento)),
        None => Ok(Dato::new_nulo()),
    }
}

/// Devuelve el largo de la lista
pub fn llen(elementos: &VecDeque<String>) -> Result<Dato, Dato> {
    Ok(Dato::new_entero(elementos.len() as i64))
}

/// Reemplaza el elemento en la posicion recibida
///
/// # Parametros
/// * `argumentos`: indice a reemplazar y nuevo elemento. El indice
///   negativo se cuenta desde el final
///
/// # Retorna
/// - OK en caso de exito, error si el indice esta fuera de rango
pub fn lset(argumentos: &[String], elementos: &mut VecDeque<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_LSET, 2, argumentos.len())?;
    let posicion = posicion_absoluta(&argumentos[0], elementos.len())?;

    match elementos.get_mut(posicion) {
        Some(lugar) => {
            *lugar = argumentos[1].to_string();
            Ok(Dato::new_texto(OPERACION_EXITOSA))
        }
        None => Err(Dato::new_error(ERROR_INDICE)),
    }
}

/// Devuelve el elemento en la posicion recibida, nulo si la
/// posicion esta fuera de rango
pub fn lindex(argumentos: &[String], elementos: &VecDeque<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_LINDEX, 1, argumentos.len())?;
    let posicion = match posicion_absoluta(&argumentos[0], elementos.len()) {
        Ok(posicion) => posicion,
        Err(_) => return Ok(Dato::new_nulo()),
    };

    match elementos.get(posicion) {
        Some(elemento) => Ok(Dato::new_texto(elemento)),
        None => Ok(Dato::new_nulo()),
    }
}

/// Remueve el elemento en la posicion recibida y lo devuelve
///
/// # Retorna
/// - El elemento removido, error si el indice esta fuera de rango
pub fn lrem(argumentos: &[String], elementos: &mut VecDeque<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_LREM, 1, argumentos.len())?;
    let posicion = posicion_absoluta(&argumentos[0], elementos.len())?;

    match elementos.remove(posicion) {
        Some(elemento) => Ok(Dato::Texto(elemento)),
        None => Err(Dato::new_error(ERROR_INDICE)),
    }
}

/// Devuelve los elementos del rango pedido
///
/// # Parametros
/// * `argumentos`: indice de inicio e indice de fin. Los indices
///   negativos se cuentan desde el final
///
/// # Retorna
/// - Lista con los elementos del rango, vacia ante un rango invalido
pub fn lrange(argumentos: &[String], elementos: &VecDeque<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_LRANGE, 2, argumentos.len())?;
    let inicio = parse_indice(&argumentos[0])?;
    let fin = parse_indice(&argumentos[1])?;

    let (inicio, fin) = ajustar_indices(inicio, fin, elementos.len() as isize);
    let recorte = elementos
        .iter()
        .skip(inicio)
        .take(fin.saturating_sub(inicio))
        .cloned()
        .collect();
    Ok(Dato::new_lista(recorte))
}

/// Retiene solo los elementos del rango pedido
///
/// # Retorna
/// - OK en caso de exito
pub fn ltrim(argumentos: &[String], elementos: &mut VecDeque<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_LTRIM, 2, argumentos.len())?;
    let inicio = parse_indice(&argumentos[0])?;
    let fin = parse_indice(&argumentos[1])?;

    let (inicio, fin) = ajustar_indices(inicio, fin, elementos.len() as isize);
    let retenidos: VecDeque<String> = elementos
        .iter()
        .skip(inicio)
        .take(fin.saturating_sub(inicio))
        .cloned()
        .collect();
    *elementos = retenidos;
    Ok(Dato::new_texto(OPERACION_EXITOSA))
}

/// Inserta un elemento antes o despues de un pivote, ubicado por
/// valor
///
/// # Parametros
/// * `argumentos`: direccion (BEFORE o AFTER), pivote y elemento
///
/// # Retorna
/// - El nuevo largo de la lista, -1 si el pivote no se encuentra
pub fn linsert(argumentos: &[String], elementos: &mut VecDeque<String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_LINSERT, 3, argumentos.len())?;

    let direccion = argumentos[0].to_uppercase();
    if direccion != "BEFORE" && direccion != "AFTER" {
        return Err(Dato::new_error("Syntax error: expected BEFORE or AFTER"));
    }

    let pivote = &argumentos[1];
    let posicion = match elementos.iter().position(|elemento| elemento == pivote) {
        Some(posicion) => posicion,
        None => return Ok(Dato::new_entero(-1)),
    };

    let destino = if direccion == "BEFORE" {
        posicion
    } else {
        posicion + 1
    };
    elementos.insert(destino, argumentos[2].to_string());
    Ok(Dato::new_entero(elementos.len() as i64))
}

/// Remueve el ultimo elemento y lo empuja al inicio de la lista
/// destino, creandola si no existe. El empuje viaja como
/// notificacion: el destino lo procesa en serie dentro de su
/// propio buzon
///
/// # Parametros
/// * `argumentos`: clave de la lista destino
/// * `elementos`: estado del actor
/// * `registro`: registro de actores
///
/// # Retorna
/// - El elemento movido, nulo si la lista origen esta vacia
pub fn rpoplpush(
    argumentos: &[String],
    elementos: &mut VecDeque<String>,
    registro: &Registro,
) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_RPOPLPUSH, 1, argumentos.len())?;

    let elemento = match elementos.pop_back() {
        Some(elemento) => elemento,
        None => return Ok(Dato::new_nulo()),
    };

    let destino = &argumentos[0];
    registro.despachar(
        destino,
        TipoNodo::Lista,
        Payload::interno(&[CMD_LPUSH, destino, &elemento]),
    );
    Ok(Dato::Texto(elemento))
}

/// Resuelve un indice con signo a una posicion absoluta de la lista
fn posicion_absoluta(token: &str, largo: usize) -> Result<usize, Dato> {
    let indice = parse_indice(token)?;
    let posicion = if indice < 0 {
        indice + largo as isize
    } else {
        indice
    };
    if posicion < 0 {
        return Err(Dato::new_error(ERROR_INDICE));
    }
    Ok(posicion as usize)
}
