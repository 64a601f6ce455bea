//! Este modulo contiene la implementacion de los comandos para
//! los actores de tipo hash
use crate::constantes::{ERROR_VALOR_NO_ENTERO, OPERACION_EXITOSA, RESPUESTA_NULA};
use crate::registro::const_cmd::*;
use crate::tipos::dato::Dato;
use std::collections::HashMap;

use super::mensaje::Payload;
use super::scan::escanear;
use super::utils::{assert_cantidad_argumentos, parse_entero, parse_flotante};

/// Despacha un comando de hash sobre los campos del actor
///
/// # Parametros
/// * `payload`: pedido a ejecutar
/// * `campos`: estado del actor
///
/// # Retorna
/// - Respuesta del comando, error de comando en otro caso
pub fn ejecutar(payload: &Payload, campos: &mut HashMap<String, String>) -> Result<Dato, Dato> {
    let argumentos = payload.argumentos();
    match payload.comando() {
        CMD_HGET => hget(argumentos, campos),
        CMD_HSET => hset(argumentos, campos),
        CMD_HSETNX => hsetnx(argumentos, campos),
        CMD_HDEL => hdel(argumentos, campos),
        CMD_HEXISTS => hexists(argumentos, campos),
        CMD_HGETALL => hgetall(campos),
        CMD_HKEYS => hkeys(campos),
        CMD_HVALS => hvals(campos),
        CMD_HLEN => hlen(campos),
        CMD_HMGET => hmget(argumentos, campos),
        CMD_HMSET => hmset(argumentos, campos),
        CMD_HINCRBY => hincrby(argumentos, campos),
        CMD_HINCRBYFLOAT => hincrbyfloat(argumentos, campos),
        CMD_HSCAN => escanear(campos.keys(), argumentos),
        otro => Err(Dato::new_error(&format!(
            "command '{otro}' is not a hash command"
        ))),
    }
}

/// Devuelve el valor de un campo, nulo si el campo no existe
pub fn hget(argumentos: &[String], campos: &HashMap<String, String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_HGET, 1, argumentos.len())?;
    match campos.get(&argumentos[0]) {
        Some(valor) => Ok(Dato::new_texto(valor)),
        None => Ok(Dato::new_nulo()),
    }
}

/// Asigna un campo, pisando el valor anterior si lo hubiera
///
/// # Parametros
/// * `argumentos`: campo y valor a guardar
/// * `campos`: estado del actor
///
/// # Retorna
/// - 1 si el campo no existia, 0 si se piso un valor previo
pub fn hset(argumentos: &[String], campos: &mut HashMap<String, String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_HSET, 2, argumentos.len())?;
    let previo = campos.insert(argumentos[0].to_string(), argumentos[1].to_string());
    Ok(Dato::new_entero(if previo.is_none() { 1 } else { 0 }))
}

/// Asigna un campo solo si no existia
///
/// # Retorna
/// - 1 si se escribio, 0 si el campo ya existia
pub fn hsetnx(argumentos: &[String], campos: &mut HashMap<String, String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_HSETNX, 2, argumentos.len())?;
    if campos.contains_key(&argumentos[0]) {
        return Ok(Dato::new_entero(0));
    }
    campos.insert(argumentos[0].to_string(), argumentos[1].to_string());
    Ok(Dato::new_entero(1))
}

/// Elimina un campo
///
/// # Retorna
/// - 1 si el campo estaba presente, 0 en otro caso
pub fn hdel(argumentos: &[String], campos: &mut HashMap<String, String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_HDEL, 1, argumentos.len())?;
    let presente = campos.remove(&argumentos[0]).is_some();
    Ok(Dato::new_entero(if presente { 1 } else { 0 }))
}

/// Determina si un campo existe
pub fn hexists(argumentos: &[String], campos: &HashMap<String, String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_HEXISTS, 1, argumentos.len())?;
    Ok(Dato::new_entero(
        if campos.contains_key(&argumentos[0]) { 1 } else { 0 },
    ))
}

/// Devuelve todos los pares campo,valor aplanados en una lista
pub fn hgetall(campos: &HashMap<String, String>) -> Result<Dato, Dato> {
    let mut aplanado = Vec::with_capacity(campos.len() * 2);
    for (campo, valor) in campos {
        aplanado.push(campo.to_string());
        aplanado.push(valor.to_string());
    }
    Ok(Dato::new_lista(aplanado))
}

/// Devuelve los nombres de todos los campos
pub fn hkeys(campos: &HashMap<String, String>) -> Result<Dato, Dato> {
    Ok(Dato::new_lista(campos.keys().cloned().collect()))
}

/// Devuelve los valores de todos los campos
pub fn hvals(campos: &HashMap<String, String>) -> Result<Dato, Dato> {
    Ok(Dato::new_lista(campos.values().cloned().collect()))
}

/// Devuelve la cantidad de campos
pub fn hlen(campos: &HashMap<String, String>) -> Result<Dato, Dato> {
    Ok(Dato::new_entero(campos.len() as i64))
}

/// Devuelve el valor de cada campo pedido, en orden, con nulo
/// para los campos inexistentes
pub fn hmget(argumentos: &[String], campos: &HashMap<String, String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_HMGET, 1, argumentos.len())?;
    let valores = argumentos
        .iter()
        .map(|campo| match campos.get(campo) {
            Some(valor) => valor.to_string(),
            None => RESPUESTA_NULA.to_string(),
        })
        .collect();
    Ok(Dato::new_lista(valores))
}

/// Asigna varios pares campo,valor de una sola vez
///
/// # Parametros
/// * `argumentos`: secuencia alternada de campos y valores
///
/// # Retorna
/// - OK en caso de exito, error si falta el valor de algun campo
pub fn hmset(argumentos: &[String], campos: &mut HashMap<String, String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_HMSET, 2, argumentos.len())?;
    if argumentos.len() % 2 != 0 {
        return Err(Dato::new_error(&format!(
            "wrong number of arguments for '{CMD_HMSET}' command"
        )));
    }
    for par in argumentos.chunks(2) {
        campos.insert(par[0].to_string(), par[1].to_string());
    }
    Ok(Dato::new_texto(OPERACION_EXITOSA))
}

/// Suma un delta entero al valor de un campo. Un campo inexistente
/// arranca en "0"
///
/// # Retorna
/// - El valor resultante, error si el campo no es numerico
pub fn hincrby(argumentos: &[String], campos: &mut HashMap<String, String>) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_HINCRBY, 2, argumentos.len())?;
    let delta = parse_entero(&argumentos[1])?;

    let actual = campos
        .get(&argumentos[0])
        .map(|valor| parse_entero(valor))
        .unwrap_or(Ok(0))?;
    let nuevo = actual
        .checked_add(delta)
        .ok_or_else(|| Dato::new_error(ERROR_VALOR_NO_ENTERO))?;

    campos.insert(argumentos[0].to_string(), nuevo.to_string());
    Ok(Dato::new_entero(nuevo))
}

/// Suma un delta flotante al valor de un campo. Un campo
/// inexistente arranca en "0"
pub fn hincrbyfloat(
    argumentos: &[String],
    campos: &mut HashMap<String, String>,
) -> Result<Dato, Dato> {
    assert_cantidad_argumentos(CMD_HINCRBYFLOAT, 2, argumentos.len())?;
    let delta = parse_flotante(&argumentos[1])?;

    let actual = campos
        .get(&argumentos[0])
        .map(|valor| parse_flotante(valor))
        .unwrap_or(Ok(0.0))?;
    let nuevo = actual + delta;

    campos.insert(argumentos[0].to_string(), nuevo.to_string());
    Ok(Dato::new_texto(&nuevo.to_string()))
}
