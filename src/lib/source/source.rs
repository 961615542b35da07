use crate::*;
use glob::glob;
use std::io::{self, Read};
use std::path::PathBuf;

pub struct Source {
    pub uri: URI,
    pub code: String,
    /// Character offsets at which each line begins.
    line_starts: Vec<usize>,
}

impl Source {
    pub fn new(uri: URI, code: String) -> Arc<Source> {
        let mut line_starts = vec![0];
        for (offset, c) in code.chars().enumerate() {
            if c == '\n' {
                line_starts.push(offset + 1);
            }
        }
        Arc::new(Source {
            uri,
            code,
            line_starts,
        })
    }

    pub fn file(path: PathBuf) -> io::Result<Arc<Source>> {
        let code = std::fs::read_to_string(&path)?;
        Ok(Self::new(URI::File(path), code))
    }

    pub fn stdin() -> io::Result<Arc<Source>> {
        let mut code = String::new();
        io::stdin().read_to_string(&mut code)?;
        Ok(Self::new(URI::Stdin, code))
    }

    pub fn files<S: AsRef<str>>(s: S) -> io::Result<Vec<Arc<Source>>> {
        let mut sources = vec![];
        let paths = glob(s.as_ref())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        for path in paths {
            match path {
                Ok(path) if path.is_file() => sources.push(Self::file(path)?),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable path: {}", e),
            }
        }
        Ok(sources)
    }

    /// Number of characters in the source.
    pub fn len(&self) -> usize {
        self.code.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Zero-based line index containing the character offset.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    pub fn line_start(&self, line: usize) -> usize {
        self.line_starts[line]
    }

    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.code.lines().nth(line)
    }

    #[cfg(test)]
    pub fn test(code: &str) -> Arc<Source> {
        Self::new(URI::Test, code.into())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Source({})", self.uri)
    }
}
