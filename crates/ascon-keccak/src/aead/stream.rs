//! Streaming init/update/final interface.
//!
//! `*_init` absorbs the complete AAD, `*_update` may be called any number of
//! times with arbitrary chunk sizes, and `*_final` produces or checks the tag.
//! Chunking never changes the result: streaming a message in pieces yields
//! the same ciphertext and tag as a one-shot call.

use super::{AsconKeccak, Phase, check_output_len};
use crate::constant_time::{ct_eq, xor_in_place};
use crate::error::AeadError;
use crate::permutation::{KECCAK_STATE_SIZE, Permutation};
use zeroize::Zeroizing;

impl<P: Permutation> AsconKeccak<P> {
    /// Start encrypting a message with the given AAD.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` unless the session is freshly keyed.
    pub fn enc_init(&mut self, aad: &[u8]) -> Result<(), AeadError> {
        self.expect_phase(Phase::Keyed, "enc_init")?;
        self.absorb_aad(aad);
        self.phase = Phase::Encrypting;
        Ok(())
    }

    /// Encrypt `input` into `output`, which must be the same length.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` outside of an encryption and
    /// `InvalidParameter` if the buffers differ in length.
    pub fn enc_update(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), AeadError> {
        self.expect_phase(Phase::Encrypting, "enc_update")?;
        check_output_len(input.len(), output.len())?;

        let mut done = 0;
        while done < input.len() {
            let (offset, todo) = self.next_block(input.len() - done);
            let block = done..done + todo;

            self.sponge.absorb_rate(&input[block.clone()], offset);
            self.sponge.squeeze_rate(&mut output[block], offset);
            done += todo;
        }
        Ok(())
    }

    /// Encrypt `buffer` in place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` outside of an encryption.
    pub fn enc_update_in_place(&mut self, buffer: &mut [u8]) -> Result<(), AeadError> {
        self.expect_phase(Phase::Encrypting, "enc_update")?;

        let mut done = 0;
        while done < buffer.len() {
            let (offset, todo) = self.next_block(buffer.len() - done);
            let block = &mut buffer[done..done + todo];

            self.sponge.absorb_rate(block, offset);
            self.sponge.squeeze_rate(block, offset);
            done += todo;
        }
        Ok(())
    }

    /// Finish the message and write a `tag.len()`-byte tag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` outside of an encryption and
    /// `InvalidParameter` for an unsupported tag length.
    pub fn enc_final(&mut self, tag: &mut [u8]) -> Result<(), AeadError> {
        self.expect_phase(Phase::Encrypting, "enc_final")?;
        self.check_tag_len(tag.len())?;
        self.finalize(tag);
        Ok(())
    }

    /// Start decrypting a message with the given AAD.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` unless the session is freshly keyed.
    pub fn dec_init(&mut self, aad: &[u8]) -> Result<(), AeadError> {
        self.expect_phase(Phase::Keyed, "dec_init")?;
        self.absorb_aad(aad);
        self.phase = Phase::Decrypting;
        Ok(())
    }

    /// Decrypt `input` into `output`, which must be the same length.
    ///
    /// The plaintext is not authenticated until [`dec_final`](Self::dec_final)
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` outside of a decryption and
    /// `InvalidParameter` if the buffers differ in length.
    pub fn dec_update(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), AeadError> {
        self.expect_phase(Phase::Decrypting, "dec_update")?;
        check_output_len(input.len(), output.len())?;

        let mut done = 0;
        while done < input.len() {
            let (offset, todo) = self.next_block(input.len() - done);
            let ciphertext = &input[done..done + todo];
            let plaintext = &mut output[done..done + todo];

            self.sponge.squeeze_rate(plaintext, offset);
            self.sponge.replace_rate(ciphertext, offset);
            xor_in_place(plaintext, ciphertext);
            done += todo;
        }
        Ok(())
    }

    /// Decrypt `buffer` in place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` outside of a decryption.
    pub fn dec_update_in_place(&mut self, buffer: &mut [u8]) -> Result<(), AeadError> {
        self.expect_phase(Phase::Decrypting, "dec_update")?;

        let mut keystream = Zeroizing::new([0u8; KECCAK_STATE_SIZE]);
        let mut done = 0;
        while done < buffer.len() {
            let (offset, todo) = self.next_block(buffer.len() - done);
            let block = &mut buffer[done..done + todo];
            let pad = &mut keystream[..todo];

            self.sponge.squeeze_rate(pad, offset);
            self.sponge.replace_rate(block, offset);
            xor_in_place(block, pad);
            done += todo;
        }
        Ok(())
    }

    /// Finish the message and verify `tag` in constant time.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailure` if the tag does not match,
    /// `InvalidState` outside of a decryption and `InvalidParameter` for an
    /// unsupported tag length. The caller must discard any plaintext
    /// produced by `dec_update` when this fails.
    pub fn dec_final(&mut self, tag: &[u8]) -> Result<(), AeadError> {
        self.expect_phase(Phase::Decrypting, "dec_final")?;
        self.check_tag_len(tag.len())?;

        let mut computed = Zeroizing::new(vec![0u8; tag.len()]);
        self.finalize(&mut computed);

        if !ct_eq(&computed, tag) {
            tracing::debug!(tag_len = tag.len(), "tag verification failed");
            return Err(AeadError::AuthenticationFailure);
        }
        Ok(())
    }

    /// Position of the next data block: `(offset, len)` within the rate.
    ///
    /// Permutes first when the current block is full, so a message ending on
    /// the rate boundary leaves the final permutation to padding.
    fn next_block(&mut self, remaining: usize) -> (usize, usize) {
        if self.cursor == P::RATE {
            self.sponge.permute();
            self.cursor = 0;
        }
        let offset = self.cursor;
        let todo = remaining.min(P::RATE - offset);
        self.cursor += todo;
        (offset, todo)
    }
}
