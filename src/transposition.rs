//! Columnar transposition (permutation) block cipher.
//!
//! The input is written row-major into a `rowNum × columnNum` matrix, the
//! ragged final row is completed with the configured [`Padding`], and the
//! columns are read back out in the order given by the key. Key values are
//! taken modulo the key length ("ring" indexing), so out-of-range entries
//! still address a valid column.
//!
//! Decryption accepts either the full padded ciphertext or a ciphertext with
//! the pad bytes stripped: the geometry is recomputed from the ciphertext
//! length and any missing pad bytes are synthetically re-inserted at the
//! last-row position of each padded column before the reorder is undone.

use crate::cipher::{BlockCipher, Direction};
use crate::error::CipherError;
use crate::padding::Padding;
use crate::params::{resolve_key, CipherKey, CipherParameter, KeyKind, PermutationKey};

/// Columnar transposition block cipher with pluggable padding.
///
/// # Examples
///
/// ```
/// use classicrypt::{
///     BlockCipher, CipherKey, CipherParameter, Direction, Padding, PermutationKey,
///     TranspositionCipher,
/// };
///
/// let key = CipherParameter::Key(CipherKey::Permutation(
///     PermutationKey::new(vec![4, 2, 1, 3]).unwrap(),
/// ));
///
/// let plaintext = b"Hello world 123456";
/// let mut cipher = TranspositionCipher::new(Padding::Zero);
/// cipher.init(Direction::Encrypt, &key).unwrap();
///
/// // 18 input bytes in 4 columns need 5 rows: 20 output bytes, 2 of padding.
/// let mut ciphertext = vec![0u8; 20];
/// let written = cipher.process_block(plaintext, &mut ciphertext).unwrap();
/// assert_eq!(written, 20);
///
/// cipher.init(Direction::Decrypt, &key).unwrap();
/// let mut recovered = vec![0u8; plaintext.len()];
/// cipher.process_block(&ciphertext, &mut recovered).unwrap();
/// assert_eq!(&recovered, plaintext);
/// ```
#[derive(Debug)]
pub struct TranspositionCipher {
    padding: Padding,
    state: Option<(Direction, PermutationKey)>,
}

impl TranspositionCipher {
    /// Creates a new, uninitialized transposition cipher with the given
    /// padding strategy.
    pub fn new(padding: Padding) -> Self {
        TranspositionCipher {
            padding,
            state: None,
        }
    }

    /// Returns the configured padding strategy.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Builds the padded row-major matrix and copies columns out in key
    /// order. Output length is always `row_num * column_num`.
    fn encrypt_block(
        key: &PermutationKey,
        padding: Padding,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize, CipherError> {
        let column_num = key.column_order().len();
        let row_num = input.len().div_ceil(column_num);
        let total = row_num * column_num;
        if output.len() < total {
            return Err(CipherError::InvalidArgument {
                reason: "output buffer too small for padded matrix",
            });
        }

        // Row-major matrix, flattened: cell (r, c) lives at r*column_num + c.
        // The pad cells are exactly the tail of the final row.
        let mut matrix = vec![0u8; total];
        matrix[..input.len()].copy_from_slice(input);
        padding.add_padding(&mut matrix, input.len());

        for (i, &order) in key.column_order().iter().enumerate() {
            let order = order % column_num;
            for row in 0..row_num {
                output[order * row_num + row] = matrix[row * column_num + i];
            }
        }
        Ok(total)
    }

    /// Undoes the column reorder, re-inserting synthetic pad bytes first if
    /// the caller supplied a pad-stripped ciphertext.
    fn decrypt_block(
        key: &PermutationKey,
        padding: Padding,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize, CipherError> {
        let column_num = key.column_order().len();
        let row_num = input.len().div_ceil(column_num);
        let total = row_num * column_num;
        if output.len() > total {
            return Err(CipherError::InvalidArgument {
                reason: "output length exceeds recovered matrix size",
            });
        }

        // Reconstruct the full rowNum*columnNum buffer the encrypter
        // produced. The padded columns are found by reading the key from the
        // end; each contributed one pad byte at its last-row position.
        let mut buffer = Vec::with_capacity(total);
        buffer.extend_from_slice(input);
        let padding_num = total - input.len();
        if padding_num > 0 {
            let mut padded_columns: Vec<usize> = (0..padding_num)
                .map(|j| key.column_order()[column_num - 1 - j] % column_num)
                .collect();
            padded_columns.sort_unstable();
            for &column in &padded_columns {
                let position = (column * row_num + row_num - 1).min(buffer.len());
                buffer.insert(position, padding.pad_byte());
            }
        }

        // buffer holds the ciphertext column-major: output column k occupies
        // buffer[k*row_num..(k+1)*row_num]. Key index i placed original
        // column i at output column order(i), so pulling those back in key
        // order rebuilds the original columns sequentially.
        let mut columns = vec![0u8; total];
        for (i, &order) in key.column_order().iter().enumerate() {
            let order = order % column_num;
            columns[i * row_num..(i + 1) * row_num]
                .copy_from_slice(&buffer[order * row_num..(order + 1) * row_num]);
        }

        // Read the matrix row-major, truncated to the caller's expected
        // unpadded length.
        for (index, slot) in output.iter_mut().enumerate() {
            let row = index / column_num;
            let column = index % column_num;
            *slot = columns[column * row_num + row];
        }
        Ok(output.len())
    }
}

impl Default for TranspositionCipher {
    fn default() -> Self {
        Self::new(Padding::Zero)
    }
}

impl BlockCipher for TranspositionCipher {
    fn init(
        &mut self,
        direction: Direction,
        parameter: &CipherParameter,
    ) -> Result<(), CipherError> {
        match resolve_key(parameter, KeyKind::Permutation)? {
            CipherKey::Permutation(key) => {
                self.state = Some((direction, key));
                Ok(())
            }
            _ => Err(CipherError::InvalidParameter),
        }
    }

    fn process_block(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CipherError> {
        let (direction, key) = match &self.state {
            Some((d, k)) => (*d, k),
            None => return Err(CipherError::NotInitialized),
        };
        if input.is_empty() {
            return Err(CipherError::InvalidArgument {
                reason: "input must not be empty",
            });
        }
        match direction {
            Direction::Encrypt => Self::encrypt_block(key, self.padding, input, output),
            Direction::Decrypt => Self::decrypt_block(key, self.padding, input, output),
        }
    }

    fn reset(&mut self) {}
}

/// Number of pad bytes needed to complete the matrix for `input` under a key
/// of `column_order.len()` columns.
pub fn pad_num(column_order: &[usize], input: &[u8]) -> usize {
    let column_num = column_order.len();
    if column_num == 0 {
        return 0;
    }
    let row_num = input.len().div_ceil(column_num);
    row_num * column_num - input.len()
}

/// Whether the matrix for `input` has room that padding would fill, i.e.
/// `rowNum * columnNum > input.len()`.
pub fn can_pad(column_order: &[usize], input: &[u8]) -> bool {
    pad_num(column_order, input) > 0
}

/// Returns `input` extended with [`pad_num`] pad bytes, for callers who want
/// to pre-pad before encrypting.
pub fn pad(column_order: &[usize], input: &[u8], padding: Padding) -> Vec<u8> {
    let mut padded = input.to_vec();
    padded.resize(input.len() + pad_num(column_order, input), padding.pad_byte());
    padded
}
