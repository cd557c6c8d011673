//! Leitura de linhas e conversão numérica tolerante para o menu interativo.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Lê uma linha removendo CR/LF finais. Retorna `None` no fim da entrada.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    let read = input
        .read_line(&mut buf)
        .context("Failed to read from standard input")?;
    if read == 0 {
        return Ok(None);
    }

    let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed_len);
    Ok(Some(buf))
}

/// Escreve o prompt (sem quebra de linha) e lê a resposta.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{text}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush standard output")?;
    read_line(input)
}

/// Interpreta o prefixo numérico da linha, no estilo de `atoi`:
/// espaços iniciais, sinal opcional e dígitos; o resto é ignorado.
/// Retorna `None` quando não há dígito algum. Valores fora de `i32` saturam.
pub fn parse_leading_int(text: &str) -> Option<i32> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = &digits[..digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len())];
    if digits.is_empty() {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits.bytes() {
        value = value * 10 + i64::from(b - b'0');
        if value > i64::from(i32::MAX) + 1 {
            break;
        }
    }
    if negative {
        value = -value;
    }
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Conversão usada nos campos inteiros: entrada inválida vale 0.
pub fn int_or_zero(text: &str) -> i32 {
    parse_leading_int(text).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut input = Cursor::new("first\r\nsecond\nthird");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("first"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("third"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_read_line_empty_line_is_not_eof() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some(""));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_prompt_writes_text_before_reading() {
        let mut input = Cursor::new("Red\n");
        let mut output = Vec::new();
        let answer = prompt(&mut input, &mut output, "Name: ").unwrap();

        assert_eq!(answer.as_deref(), Some("Red"));
        assert_eq!(String::from_utf8(output).unwrap(), "Name: ");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  -17"), Some(-17));
        assert_eq!(parse_leading_int("+8"), Some(8));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("- 5"), None);
    }

    #[test]
    fn test_parse_leading_int_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i32::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(i32::MIN));
        assert_eq!(parse_leading_int("-2147483648"), Some(i32::MIN));
    }

    #[test]
    fn test_int_or_zero() {
        assert_eq!(int_or_zero("120"), 120);
        assert_eq!(int_or_zero("lots"), 0);
        assert_eq!(int_or_zero(""), 0);
    }
}
