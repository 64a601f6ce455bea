//! Este modulo contiene el tipo de dato que viaja entre actores,
//! sesiones y clientes como respuesta de un comando
use crate::constantes::RESPUESTA_NULA;

/// Respuesta de un comando. Los errores tambien son datos: viajan
/// por el mismo canal que los valores y se escriben al cliente
/// igual que cualquier otra respuesta
#[derive(Debug, Clone, PartialEq)]
pub enum Dato {
    /// Un string plano, tal como se almacena
    Texto(String),
    /// Un entero con signo, se escribe en decimal
    Entero(i64),
    /// Varios elementos, se unen con saltos de linea al escribirse
    Lista(Vec<String>),
    /// Valor inexistente
    Nulo,
    /// Error legible por humanos, sin prefijo distintivo
    Error(String),
}

impl Dato {
    pub fn new_texto(contenido: &str) -> Dato {
        Dato::Texto(contenido.to_string())
    }

    pub fn new_entero(valor: i64) -> Dato {
        Dato::Entero(valor)
    }

    pub fn new_lista(elementos: Vec<String>) -> Dato {
        Dato::Lista(elementos)
    }

    pub fn new_nulo() -> Dato {
        Dato::Nulo
    }

    pub fn new_error(descripcion: &str) -> Dato {
        Dato::Error(descripcion.to_string())
    }

    /// Indica si el dato representa un error
    pub fn es_error(&self) -> bool {
        matches!(self, Dato::Error(_))
    }

    /// Serializa el dato a la linea que se escribe en el socket,
    /// sin el salto de linea final
    ///
    /// # Retorna
    /// - String con la representacion textual del dato
    pub fn a_linea(&self) -> String {
        match self {
            Dato::Texto(contenido) => contenido.to_string(),
            Dato::Entero(valor) => valor.to_string(),
            Dato::Lista(elementos) => elementos.join("\n"),
            Dato::Nulo => RESPUESTA_NULA.to_string(),
            Dato::Error(descripcion) => descripcion.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Dato;

    #[test]
    fn test_texto_a_linea() {
        assert_eq!(Dato::new_texto("hola").a_linea(), "hola");
    }

    #[test]
    fn test_entero_a_linea() {
        assert_eq!(Dato::new_entero(-7).a_linea(), "-7");
    }

    #[test]
    fn test_lista_a_linea_une_con_saltos() {
        let dato = Dato::new_lista(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(dato.a_linea(), "a\nb\nc");
    }

    #[test]
    fn test_lista_vacia_a_linea() {
        assert_eq!(Dato::new_lista(vec![]).a_linea(), "");
    }

    #[test]
    fn test_nulo_a_linea() {
        assert_eq!(Dato::new_nulo().a_linea(), "None");
    }

    #[test]
    fn test_error_es_error() {
        let dato = Dato::new_error("algo salio mal");
        assert!(dato.es_error());
        assert_eq!(dato.a_linea(), "algo salio mal");
    }
}
