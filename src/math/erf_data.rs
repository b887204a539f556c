/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Lookup tables for the error functions.
//!
//! Entry `i` holds `erf(r)` or `erfc(r)` together with the derivative scale
//! `2/sqrt(pi) e^(-r^2)` at the node `r = i / 128` (`i / 64` for erfc).

/// `(erf(r), scale(r))` for `r = i / 128` in `[0, 6]`
pub(crate) static ERF_TABLE: [(u64, u64); 769] = [
    (0x0000000000000000, 0x3ff20dd750429b6d),
    (0x3f820dbf3deb1340, 0x3ff20d8f1975c85d),
    (0x3f920d77083f17a0, 0x3ff20cb67bd452c7),
    (0x3f9b137e0cf584dc, 0x3ff20b4d8bac36c1),
    (0x3fa20c5645dd2538, 0x3ff209546ad13ccf),
    (0x3fa68e5d3bbc9526, 0x3ff206cb4897b148),
    (0x3fab0fafef135745, 0x3ff203b261cd0053),
    (0x3faf902a77bd3821, 0x3ff2000a00ae3804),
    (0x3fb207d480e90658, 0x3ff1fbd27cdc72d3),
    (0x3fb44703e87e8593, 0x3ff1f70c3b4f2cc8),
    (0x3fb68591a1e83b5d, 0x3ff1f1b7ae44867f),
    (0x3fb8c36beb8a8d23, 0x3ff1ebd5552f795b),
    (0x3fbb0081148a873a, 0x3ff1e565bca400d4),
    (0x3fbd3cbf7e70a4b3, 0x3ff1de697e413d29),
    (0x3fbf78159ec8bb50, 0x3ff1d6e14099944a),
    (0x3fc0d939005f65e5, 0x3ff1cecdb718d61c),
    (0x3fc1f5e1a35c3b89, 0x3ff1c62fa1e869b6),
    (0x3fc311fc15f56d14, 0x3ff1bd07cdd189ac),
    (0x3fc42d7fc2f64959, 0x3ff1b357141d95d5),
    (0x3fc548642321d7c6, 0x3ff1a91e5a748165),
    (0x3fc662a0bdf7a89f, 0x3ff19e5e92b964ab),
    (0x3fc77c2d2a765f9e, 0x3ff19318bae53a04),
    (0x3fc895010fdbdbfd, 0x3ff1874ddcdfce24),
    (0x3fc9ad142662e14d, 0x3ff17aff0e56ec10),
    (0x3fcac45e37fe2526, 0x3ff16e2d7093cd8c),
    (0x3fcbdad72110a648, 0x3ff160da304ed92f),
    (0x3fccf076d1233237, 0x3ff153068581b781),
    (0x3fce05354b96ff36, 0x3ff144b3b337c90c),
    (0x3fcf190aa85540e2, 0x3ff135e3075d076b),
    (0x3fd015f78a3dcf3d, 0x3ff12695da8b5bde),
    (0x3fd09eed6982b948, 0x3ff116cd8fd67618),
    (0x3fd127631eb8de32, 0x3ff1068b94962e5e),
    (0x3fd1af54e232d609, 0x3ff0f5d1602f7e41),
    (0x3fd236bef825d9a2, 0x3ff0e4a073dc1b91),
    (0x3fd2bd9db0f7827f, 0x3ff0d2fa5a70c168),
    (0x3fd343ed6989b7d9, 0x3ff0c0e0a8223359),
    (0x3fd3c9aa8b84beda, 0x3ff0ae54fa490723),
    (0x3fd44ed18d9f6462, 0x3ff09b58f724416b),
    (0x3fd4d35ef3e5372e, 0x3ff087ee4d9ad247),
    (0x3fd5574f4ffac98e, 0x3ff07416b4fbfe7c),
    (0x3fd5da9f415ff23f, 0x3ff05fd3ecbec298),
    (0x3fd65d4b75b00471, 0x3ff04b27bc403d30),
    (0x3fd6df50a8dff772, 0x3ff03613f2812daf),
    (0x3fd760aba57a76bf, 0x3ff0209a65e29545),
    (0x3fd7e15944d9d3e4, 0x3ff00abcf3e187a9),
    (0x3fd861566f5fd3c0, 0x3fefe8fb01a47307),
    (0x3fd8e0a01cab516b, 0x3fefbbbbef34b4b2),
    (0x3fd95f3353cbb146, 0x3fef8dc092d58ff8),
    (0x3fd9dd0d2b721f39, 0x3fef5f0cdaf15313),
    (0x3fda5a2aca209394, 0x3fef2fa4c16c0019),
    (0x3fdad68966569a87, 0x3feeff8c4b1375db),
    (0x3fdb522646bbda68, 0x3feecec7870ebca8),
    (0x3fdbccfec24855b8, 0x3fee9d5a8e4c934e),
    (0x3fdc4710406a65fc, 0x3fee6b4982f158b9),
    (0x3fdcc058392a6d2d, 0x3fee38988fc46e72),
    (0x3fdd38d4354c3bd0, 0x3fee054be79d3042),
    (0x3fddb081ce6e2a48, 0x3fedd167c4cf9d2a),
    (0x3fde275eaf25e458, 0x3fed9cf06898cdaf),
    (0x3fde9d68931ae650, 0x3fed67ea1a8b5368),
    (0x3fdf129d471eabb1, 0x3fed325927fb9d89),
    (0x3fdf86faa9428f9d, 0x3fecfc41e36c7df9),
    (0x3fdffa7ea8eb5fd0, 0x3fecc5a8a3fbea40),
    (0x3fe03693a371519c, 0x3fec8e91c4d01368),
    (0x3fe06f794ab2cae7, 0x3fec5701a484ef9d),
    (0x3fe0a7ef5c18edd2, 0x3fec1efca49a5011),
    (0x3fe0dff4f247f6c6, 0x3febe68728e29d5e),
    (0x3fe1178930ada115, 0x3febada596f25436),
    (0x3fe14eab43841b55, 0x3feb745c55905bf8),
    (0x3fe1855a5fd3dd50, 0x3feb3aafcc27502e),
    (0x3fe1bb95c3746199, 0x3feb00a46237d5be),
    (0x3fe1f15cb50bc4de, 0x3feac63e7ecc1411),
    (0x3fe226ae840d4d70, 0x3fea8b8287ec6a09),
    (0x3fe25b8a88b6dd7f, 0x3fea5074e2157620),
    (0x3fe28ff0240d52cd, 0x3fea1519efaf889e),
    (0x3fe2c3debfd7d6c1, 0x3fe9d97610879642),
    (0x3fe2f755ce9a21f4, 0x3fe99d8da149c13f),
    (0x3fe32a54cb8db67b, 0x3fe96164fafd8de3),
    (0x3fe35cdb3a9a144d, 0x3fe925007283d7aa),
    (0x3fe38ee8a84beb71, 0x3fe8e86458169af8),
    (0x3fe3c07ca9cb4f9e, 0x3fe8ab94f6caa71d),
    (0x3fe3f196dcd0f135, 0x3fe86e9694134b9e),
    (0x3fe42236e79a5fa6, 0x3fe8316d6f48133d),
    (0x3fe4525c78dd5966, 0x3fe7f41dc12c9e89),
    (0x3fe4820747ba2dc2, 0x3fe7b6abbb7aaf19),
    (0x3fe4b13713ad3513, 0x3fe7791b886e7403),
    (0x3fe4dfeba47f63cc, 0x3fe73b714a552763),
    (0x3fe50e24ca35fd2c, 0x3fe6fdb11b1e0c34),
    (0x3fe53be25d016a4f, 0x3fe6bfdf0beddaf5),
    (0x3fe569243d2b3a9b, 0x3fe681ff24b4ab04),
    (0x3fe595ea53035283, 0x3fe6441563c665d4),
    (0x3fe5c2348ecc4dc3, 0x3fe60625bd75d07b),
    (0x3fe5ee02e8a71a53, 0x3fe5c8341bb23767),
    (0x3fe61955607dd15d, 0x3fe58a445da7c74c),
    (0x3fe6442bfdedd397, 0x3fe54c5a57629db0),
    (0x3fe66e86d0312e82, 0x3fe50e79d1749ac9),
    (0x3fe69865ee075011, 0x3fe4d0a6889dfd9f),
    (0x3fe6c1c9759d0e5f, 0x3fe492e42d78d2c5),
    (0x3fe6eab18c74091b, 0x3fe4553664273d24),
    (0x3fe7131e5f496a5a, 0x3fe417a0c4049fd0),
    (0x3fe73b1021fc0cb8, 0x3fe3da26d759aef5),
    (0x3fe762870f720c6f, 0x3fe39ccc1b136d5a),
    (0x3fe78983697dc96f, 0x3fe35f93fe7d1b3d),
    (0x3fe7b00578c26037, 0x3fe32281e2fd1a92),
    (0x3fe7d60d8c979f7b, 0x3fe2e5991bd4cbfc),
    (0x3fe7fb9bfaed8078, 0x3fe2a8dcede3673b),
    (0x3fe820b1202f27fb, 0x3fe26c508f6bd0ff),
    (0x3fe8454d5f25760d, 0x3fe22ff727dd6f7b),
    (0x3fe8697120d92a4a, 0x3fe1f3d3cf9ffe5a),
    (0x3fe88d1cd474a2e0, 0x3fe1b7e98fe26217),
    (0x3fe8b050ef253c37, 0x3fe17c3b626c7a12),
    (0x3fe8d30debfc572e, 0x3fe140cc3173f007),
    (0x3fe8f5544bd00c04, 0x3fe1059ed7740313),
    (0x3fe91724951b8fc6, 0x3fe0cab61f084b93),
    (0x3fe9387f53df5238, 0x3fe09014c2ca74da),
    (0x3fe959651980da31, 0x3fe055bd6d32e8d7),
    (0x3fe979d67caa6631, 0x3fe01bb2b87c6968),
    (0x3fe999d4192a5715, 0x3fdfc3ee5d1524b0),
    (0x3fe9b95e8fd26aba, 0x3fdf511a91a67d2a),
    (0x3fe9d8768656cc42, 0x3fdedeeee0959518),
    (0x3fe9f71ca72cffb6, 0x3fde6d6ffaa65a25),
    (0x3fea1551a16aaeaf, 0x3fddfca26f5bbf88),
    (0x3fea331628a45b92, 0x3fdd8c8aace11e63),
    (0x3fea506af4cc00f4, 0x3fdd1d2cfff91594),
    (0x3fea6d50c20fa293, 0x3fdcae8d93f1d7b7),
    (0x3fea89c850b7d54d, 0x3fdc40b0729ed548),
    (0x3feaa5d265064366, 0x3fdbd3998457afdb),
    (0x3feac16fc7143263, 0x3fdb674c8ffc6283),
    (0x3feadca142b10f98, 0x3fdafbcd3afe8ab6),
    (0x3feaf767a741088b, 0x3fda911f096fbc26),
    (0x3feb11c3c79bb424, 0x3fda27455e14c93c),
    (0x3feb2bb679ead19c, 0x3fd9be437a7de946),
    (0x3feb4540978921ee, 0x3fd9561c7f23a47b),
    (0x3feb5e62fce16095, 0x3fd8eed36b886d93),
    (0x3feb771e894d602e, 0x3fd8886b1e5ecfd1),
    (0x3feb8f741ef54f83, 0x3fd822e655b417e7),
    (0x3feba764a2af2b78, 0x3fd7be47af1f5d89),
    (0x3febbef0fbde6221, 0x3fd75a91a7f4d2ed),
    (0x3febd61a1453ab44, 0x3fd6f7c69d7d3ef8),
    (0x3febece0d82d1a5c, 0x3fd695e8cd31867e),
    (0x3fec034635b66e23, 0x3fd634fa54fa285f),
    (0x3fec194b1d49a184, 0x3fd5d4fd33729015),
    (0x3fec2ef0812fc1bd, 0x3fd575f3483021c3),
    (0x3fec443755820d64, 0x3fd517de540ce2a3),
    (0x3fec5920900b5fd1, 0x3fd4babff975a04c),
    (0x3fec6dad2829ec62, 0x3fd45e99bcbb7915),
    (0x3fec81de16b14cef, 0x3fd4036d0468a7a2),
    (0x3fec95b455cce69d, 0x3fd3a93b1998736c),
    (0x3feca930e0e2a825, 0x3fd35005285227f1),
    (0x3fecbc54b476248d, 0x3fd2f7cc3fe6f423),
    (0x3feccf20ce0c0d27, 0x3fd2a09153529381),
    (0x3fece1962c0e0d8b, 0x3fd24a55399ea239),
    (0x3fecf3b5cdaf0c39, 0x3fd1f518ae487dc8),
    (0x3fed0580b2cfd249, 0x3fd1a0dc51a9934d),
    (0x3fed16f7dbe41ca0, 0x3fd14da0a961fd14),
    (0x3fed281c49d818d0, 0x3fd0fb6620c550af),
    (0x3fed38eefdf64fdd, 0x3fd0aa2d09497f2b),
    (0x3fed4970f9ce00d9, 0x3fd059f59af7a906),
    (0x3fed59a33f19ed42, 0x3fd00abff4dec7a3),
    (0x3fed6986cfa798e7, 0x3fcf79183b101c5b),
    (0x3fed791cad3eff01, 0x3fcedeb406d9c825),
    (0x3fed8865d98abe01, 0x3fce4652fadcb6b2),
    (0x3fed97635600bb89, 0x3fcdaff4969c0b04),
    (0x3feda61623cb41e0, 0x3fcd1b982c501370),
    (0x3fedb47f43b2980d, 0x3fcc893ce1dcbef7),
    (0x3fedc29fb60715af, 0x3fcbf8e1b1ca2279),
    (0x3fedd0787a8bb39d, 0x3fcb6a856c3ed54f),
    (0x3fedde0a90611a0d, 0x3fcade26b7fbed95),
    (0x3fedeb56f5f12d28, 0x3fca53c4135a6526),
    (0x3fedf85ea8db188e, 0x3fc9cb5bd549b111),
    (0x3fee0522a5dfda73, 0x3fc944ec2e4f5630),
    (0x3fee11a3e8cf4eb8, 0x3fc8c07329874652),
    (0x3fee1de36c75ba58, 0x3fc83deeada4d25a),
    (0x3fee29e22a89d766, 0x3fc7bd5c7df3fe9c),
    (0x3fee35a11b9b61ce, 0x3fc73eba3b5b07b7),
    (0x3fee4121370224cc, 0x3fc6c205655be720),
    (0x3fee4c6372cd8927, 0x3fc6473b5b15a7a1),
    (0x3fee5768c3b4a3fc, 0x3fc5ce595c455b0a),
    (0x3fee62321d06c5e0, 0x3fc5575c8a468362),
    (0x3fee6cc0709c8a0d, 0x3fc4e241e912c305),
    (0x3fee7714aec96534, 0x3fc46f066040a832),
    (0x3fee812fc64db369, 0x3fc3fda6bc016994),
    (0x3fee8b12a44944a8, 0x3fc38e1fae1d6a9d),
    (0x3fee94be342e6743, 0x3fc3206dceef5f87),
    (0x3fee9e335fb56f87, 0x3fc2b48d9e5dea1c),
    (0x3feea7730ed0bbb9, 0x3fc24a7b84d38971),
    (0x3feeb07e27a133aa, 0x3fc1e233d434b813),
    (0x3feeb9558e6b42ce, 0x3fc17bb2c8d41535),
    (0x3feec1fa258c4bea, 0x3fc116f48a6476cc),
    (0x3feeca6ccd709544, 0x3fc0b3f52ce8c383),
    (0x3feed2ae6489ac1e, 0x3fc052b0b1a174ea),
    (0x3feedabfc7453e63, 0x3fbfe6460fef4680),
    (0x3feee2a1d004692c, 0x3fbf2a901ccafb37),
    (0x3feeea5557137ae0, 0x3fbe723726b824a9),
    (0x3feef1db32a2277c, 0x3fbdbd32ac4c99b0),
    (0x3feef93436bc2daa, 0x3fbd0b7a0f921e7c),
    (0x3fef006135426b26, 0x3fbc5d0497c09e74),
    (0x3fef0762fde45ee6, 0x3fbbb1c972f23e50),
    (0x3fef0e3a5e1a1788, 0x3fbb09bfb7d11a84),
    (0x3fef14e8211e8c55, 0x3fba64de673e8837),
    (0x3fef1b6d0fea5f4d, 0x3fb9c31c6df3b1b8),
    (0x3fef21c9f12f0677, 0x3fb92470a61b6965),
    (0x3fef27ff89525acf, 0x3fb888d1d8e510a3),
    (0x3fef2e0e9a6a8b09, 0x3fb7f036c0107294),
    (0x3fef33f7e43a706b, 0x3fb75a96077274ba),
    (0x3fef39bc242e43e6, 0x3fb6c7e64e7281cb),
    (0x3fef3f5c1558b19e, 0x3fb6381e2980956b),
    (0x3fef44d870704911, 0x3fb5ab342383d178),
    (0x3fef4a31ebcd47df, 0x3fb5211ebf41880b),
    (0x3fef4f693b67bd77, 0x3fb499d478bca735),
    (0x3fef547f10d60597, 0x3fb4154bc68d75c3),
    (0x3fef59741b4b97cf, 0x3fb3937b1b31925a),
    (0x3fef5e4907982a07, 0x3fb31458e6542847),
    (0x3fef62fe80272419, 0x3fb297db960e4f63),
    (0x3fef67952cff6282, 0x3fb21df9981f8e53),
    (0x3fef6c0db3c34641, 0x3fb1a6a95b1e786f),
    (0x3fef7068b7b10fd9, 0x3fb131e14fa1625d),
    (0x3fef74a6d9a38383, 0x3fb0bf97e95f2a64),
    (0x3fef78c8b812d498, 0x3fb04fc3a0481321),
    (0x3fef7cceef15d631, 0x3fafc4b5e32d6259),
    (0x3fef80ba18636f07, 0x3faeeea8c1b1db94),
    (0x3fef848acb544e95, 0x3fae1d4cf1e2450a),
    (0x3fef88419ce4e184, 0x3fad508f9a1ea64f),
    (0x3fef8bdf1fb78370, 0x3fac885df3451a07),
    (0x3fef8f63e416ebff, 0x3fabc4a54a84e834),
    (0x3fef92d077f8d56d, 0x3fab055303221015),
    (0x3fef96256700da8e, 0x3faa4a549829587e),
    (0x3fef99633a838a57, 0x3fa993979e14fffe),
    (0x3fef9c8a7989af0d, 0x3fa8e109c4622913),
    (0x3fef9f9ba8d3c733, 0x3fa83298d717210e),
    (0x3fefa2974addae45, 0x3fa78832c03aa2b1),
    (0x3fefa57ddfe27376, 0x3fa6e1c5893c380b),
    (0x3fefa84fe5e05c8d, 0x3fa63f3f5c4de13b),
    (0x3fefab0dd89d1309, 0x3fa5a08e85af27e0),
    (0x3fefadb831a9f9c3, 0x3fa505a174e9c929),
    (0x3fefb04f6868a944, 0x3fa46e66be002240),
    (0x3fefb2d3f20f9101, 0x3fa3dacd1a8d8cce),
    (0x3fefb54641aebbc9, 0x3fa34ac36ad8dafe),
    (0x3fefb7a6c834b5a2, 0x3fa2be38b6d92415),
    (0x3fefb9f5f4739170, 0x3fa2351c2f2d1449),
    (0x3fefbc3433260ca5, 0x3fa1af5d2e04f3f6),
    (0x3fefbe61eef4cf6a, 0x3fa12ceb37ff9bc3),
    (0x3fefc07f907bc794, 0x3fa0adb5fcfa8c75),
    (0x3fefc28d7e4f9cd0, 0x3fa031ad58d56279),
    (0x3fefc48c1d033c7a, 0x3f9f7182a851bca2),
    (0x3fefc67bcf2d7b8f, 0x3f9e85c449e377f3),
    (0x3fefc85cf56ecd38, 0x3f9da0005e5f28df),
    (0x3fefca2fee770c79, 0x3f9cc0180af00a8b),
    (0x3fefcbf5170b578b, 0x3f9be5ecd2fcb5f9),
    (0x3fefcdacca0bfb73, 0x3f9b1160991ff737),
    (0x3fefcf57607a6e7c, 0x3f9a4255a00b9f03),
    (0x3fefd0f5317f582f, 0x3f9978ae8b55ce1b),
    (0x3fefd2869270a56f, 0x3f98b44e6031383e),
    (0x3fefd40bd6d7a785, 0x3f97f5188610ddc8),
    (0x3fefd58550773cb5, 0x3f973af0c737bb45),
    (0x3fefd6f34f52013a, 0x3f9685bb5134ef13),
    (0x3fefd85621b0876d, 0x3f95d55cb54cd53a),
    (0x3fefd9ae142795e3, 0x3f9529b9e8cf9a1e),
    (0x3fefdafb719e6a69, 0x3f9482b8455dc491),
    (0x3fefdc3e835500b3, 0x3f93e03d891b37de),
    (0x3fefdd7790ea5bc0, 0x3f93422fd6d12e2b),
    (0x3fefdea6e062d0c9, 0x3f92a875b5ffab56),
    (0x3fefdfccb62e52d3, 0x3f9212f612dee7fb),
    (0x3fefe0e9552ebdd6, 0x3f9181983e5133dd),
    (0x3fefe1fcfebe2083, 0x3f90f443edc5ce49),
    (0x3fefe307f2b503d0, 0x3f906ae13b0d3255),
    (0x3fefe40a6f70af4b, 0x3f8fcab1483ea7fc),
    (0x3fefe504b1d9696c, 0x3f8ec72615a894c4),
    (0x3fefe5f6f568b301, 0x3f8dcaf3691fc448),
    (0x3fefe6e1742f7cf6, 0x3f8cd5ec93c12432),
    (0x3fefe7c466dc57a1, 0x3f8be7e5ac24963b),
    (0x3fefe8a004c19ae6, 0x3f8b00b38d6b3575),
    (0x3fefe97483db8670, 0x3f8a202bd6372dce),
    (0x3fefea4218d6594a, 0x3f894624e78e0faf),
    (0x3fefeb08f7146046, 0x3f887275e3a6869e),
    (0x3fefebc950b3fa75, 0x3f87a4f6aca256cb),
    (0x3fefec835695932e, 0x3f86dd7fe3358230),
    (0x3fefed37386190fb, 0x3f861beae53b72b7),
    (0x3fefede5248e38f4, 0x3f856011cc3b036d),
    (0x3fefee8d486585ee, 0x3f84a9cf6bda3f4c),
    (0x3fefef2fd00af31a, 0x3f83f8ff5042a88e),
    (0x3fefefcce6813974, 0x3f834d7dbc76d7e5),
    (0x3feff064b5afffbe, 0x3f82a727a89a3f14),
    (0x3feff0f766697c76, 0x3f8205dac02bd6b9),
    (0x3feff18520700971, 0x3f81697560347b26),
    (0x3feff20e0a7ba8c2, 0x3f80d1d69569b82d),
    (0x3feff2924a3f7a83, 0x3f803ede1a45bfee),
    (0x3feff312046f2339, 0x3f7f60d8aa2a88f2),
    (0x3feff38d5cc4227f, 0x3f7e4cc4abf7d065),
    (0x3feff404760319b4, 0x3f7d4143a9dfe965),
    (0x3feff47772010262, 0x3f7c3e1a5f5c077c),
    (0x3feff4e671a85425, 0x3f7b430ecf4a83a8),
    (0x3feff55194fe19df, 0x3f7a4fe83fb9db25),
    (0x3feff5b8fb26f5f6, 0x3f79646f35a76624),
    (0x3feff61cc26c1578, 0x3f78806d70b2fc36),
    (0x3feff67d08401202, 0x3f77a3ade6c8b3e5),
    (0x3feff6d9e943c231, 0x3f76cdfcbfc1e263),
    (0x3feff733814af88c, 0x3f75ff2750fe7820),
    (0x3feff789eb6130c9, 0x3f7536fc18f7ce5c),
    (0x3feff7dd41ce2b4d, 0x3f74754abacdf1dc),
    (0x3feff82d9e1a76d8, 0x3f73b9e3f9d06e3f),
    (0x3feff87b1913e853, 0x3f730499b503957f),
    (0x3feff8c5cad200a5, 0x3f72553ee2a336bf),
    (0x3feff90dcaba4096, 0x3f71aba78ba3af89),
    (0x3feff9532f846ab0, 0x3f7107a8c7323a6e),
    (0x3feff9960f3eb327, 0x3f706918b6355624),
    (0x3feff9d67f51ddba, 0x3f6f9f9cfd9c3035),
    (0x3feffa14948549a7, 0x3f6e77448fb66bb9),
    (0x3feffa506302ebae, 0x3f6d58da68fd1170),
    (0x3feffa89fe5b3625, 0x3f6c4412bf4b8f0b),
    (0x3feffac17988ef4b, 0x3f6b38a3af2e55b4),
    (0x3feffaf6e6f4f5c0, 0x3f6a3645330550ff),
    (0x3feffb2a5879f35e, 0x3f693cb11a30d765),
    (0x3feffb5bdf67fe6f, 0x3f684ba3004a50d0),
    (0x3feffb8b8c88295f, 0x3f6762d84469c18f),
    (0x3feffbb970200110, 0x3f66821000795a03),
    (0x3feffbe599f4f9d9, 0x3f65a90b00981d93),
    (0x3feffc10194fcb64, 0x3f64d78bba8ca5fd),
    (0x3feffc38fcffbb7c, 0x3f640d564548fad7),
    (0x3feffc60535dd7f5, 0x3f634a305080681f),
    (0x3feffc862a501fd7, 0x3f628de11c5031eb),
    (0x3feffcaa8f4c9bea, 0x3f61d83170fbf6fb),
    (0x3feffccd8f5c66d1, 0x3f6128eb96be8798),
    (0x3feffcef371ea4d7, 0x3f607fdb4dafea5f),
    (0x3feffd0f92cb6ba7, 0x3f5fb99b8b8279e1),
    (0x3feffd2eae369a07, 0x3f5e7f232d9e2630),
    (0x3feffd4c94d29fdb, 0x3f5d4fed7195d7e8),
    (0x3feffd6951b33686, 0x3f5c2b9cf7f893bf),
    (0x3feffd84ef9009ee, 0x3f5b11d702b3deb2),
    (0x3feffd9f78c7524a, 0x3f5a024365f771bd),
    (0x3feffdb8f7605ee7, 0x3f58fc8c794b03b5),
    (0x3feffdd1750e1220, 0x3f58005f08d6f1ef),
    (0x3feffde8fb314ebf, 0x3f570d6a46e07dda),
    (0x3feffdff92db56e5, 0x3f56235fbd7a4345),
    (0x3feffe1544d01ccb, 0x3f5541f340697987),
    (0x3feffe2a1988857c, 0x3f5468dadf4080ab),
    (0x3feffe3e19349dc7, 0x3f5397ced7af2b15),
    (0x3feffe514bbdc197, 0x3f52ce898809244e),
    (0x3feffe63b8c8b5f7, 0x3f520cc76202c5fb),
    (0x3feffe7567b7b5e1, 0x3f515246dda49d47),
    (0x3feffe865fac722b, 0x3f509ec86c75d497),
    (0x3feffe96a78a04a9, 0x3f4fe41cd9bb4eee),
    (0x3feffea645f6d6da, 0x3f4e97ba3b77f306),
    (0x3feffeb5415e7c44, 0x3f4d57f524723822),
    (0x3feffec39ff380b9, 0x3f4c245d4b99847a),
    (0x3feffed167b12ac2, 0x3f4afc85e0f82e12),
    (0x3feffede9e5d3262, 0x3f49e005769dbc1d),
    (0x3feffeeb49896c6d, 0x3f48ce75e9f6f8a0),
    (0x3feffef76e956a9f, 0x3f47c7744d9378f7),
    (0x3fefff0312b010b5, 0x3f46caa0d3582fe9),
    (0x3fefff0e3ad91ec2, 0x3f45d79eb71e893b),
    (0x3fefff18ebe2b0e1, 0x3f44ee1429bf7cc0),
    (0x3fefff232a72b48e, 0x3f440daa3c89f5b6),
    (0x3fefff2cfb0453d9, 0x3f43360ccd23db3a),
    (0x3fefff3661e9569d, 0x3f4266ea71d4f71a),
    (0x3fefff3f634b79f9, 0x3f419ff4663ae9df),
    (0x3fefff48032dbe40, 0x3f40e0de78654d1e),
    (0x3fefff50456dab8c, 0x3f40295ef6591848),
    (0x3fefff582dc48d30, 0x3f3ef25d37f49fe1),
    (0x3fefff5fbfc8a439, 0x3f3da01102b5f851),
    (0x3fefff66feee5129, 0x3f3c5b5412dcafad),
    (0x3fefff6dee89352e, 0x3f3b23a5a23e4210),
    (0x3fefff7491cd4af6, 0x3f39f8893d8fd1c1),
    (0x3fefff7aebcff755, 0x3f38d986a4187285),
    (0x3fefff80ff8911fd, 0x3f37c629a822bc9e),
    (0x3fefff86cfd3e657, 0x3f36be02102b3520),
    (0x3fefff8c5f702ccf, 0x3f35c0a378c90bca),
    (0x3fefff91b102fca8, 0x3f34cda5374ea275),
    (0x3fefff96c717b695, 0x3f33e4a23d1f4703),
    (0x3fefff9ba420e834, 0x3f330538fbb77ecd),
    (0x3fefffa04a7928b1, 0x3f322f0b496539be),
    (0x3fefffa4bc63ee9a, 0x3f3161be46ad3b50),
    (0x3fefffa8fc0e5f33, 0x3f309cfa445b00ff),
    (0x3fefffad0b901755, 0x3f2fc0d55470cf51),
    (0x3fefffb0ecebee1b, 0x3f2e577bbcd49935),
    (0x3fefffb4a210b172, 0x3f2cfd4a5adec5c0),
    (0x3fefffb82cd9dcbf, 0x3f2bb1a9657ce465),
    (0x3fefffbb8f1049c6, 0x3f2a740684026555),
    (0x3fefffbeca6adbe9, 0x3f2943d4a1d1ed39),
    (0x3fefffc1e08f25f5, 0x3f28208bc334a6a5),
    (0x3fefffc4d3120aa1, 0x3f2709a8db59f25c),
    (0x3fefffc7a37857d2, 0x3f25feada379d8b7),
    (0x3fefffca53375ce3, 0x3f24ff207314a102),
    (0x3fefffcce3b57bff, 0x3f240a8c1949f75e),
    (0x3fefffcf564ab6b7, 0x3f23207fb7420eb9),
    (0x3fefffd1ac4135f9, 0x3f22408e9ba3327f),
    (0x3fefffd3e6d5cd87, 0x3f216a501f0e42ca),
    (0x3fefffd607387b07, 0x3f209d5f819c9e29),
    (0x3fefffd80e8ce0da, 0x3f1fb2b792b40a22),
    (0x3fefffd9fdeabcce, 0x3f1e3bcf436a1a95),
    (0x3fefffdbd65e5ad0, 0x3f1cd55277c18d05),
    (0x3fefffdd98e903b2, 0x3f1b7e94604479dc),
    (0x3fefffdf46816833, 0x3f1a36eec00926dd),
    (0x3fefffe0e0140857, 0x3f18fdc1b2dcf7b9),
    (0x3fefffe26683972a, 0x3f17d2737527c3f9),
    (0x3fefffe3daa95b18, 0x3f16b4702d7d5849),
    (0x3fefffe53d558ae9, 0x3f15a329b7d30748),
    (0x3fefffe68f4fa777, 0x3f149e17724f4d41),
    (0x3fefffe7d156d244, 0x3f13a4b60ba9aa4e),
    (0x3fefffe904222101, 0x3f12b6875310f785),
    (0x3fefffea2860ee1e, 0x3f11d312098e9dba),
    (0x3fefffeb3ebb267b, 0x3f10f9e1b4dd36df),
    (0x3fefffec47d19457, 0x3f102a8673a94692),
    (0x3fefffed443e2787, 0x3f0ec929a665b449),
    (0x3fefffee34943b15, 0x3f0d4f4b4c8e09ed),
    (0x3fefffef1960d85d, 0x3f0be6abbb10a5aa),
    (0x3fefffeff32af7af, 0x3f0a8e8cc1fadef6),
    (0x3feffff0c273bea2, 0x3f094637d5bacfdb),
    (0x3feffff187b6bc0e, 0x3f080cfdc72220cf),
    (0x3feffff2436a21dc, 0x3f06e2367dc27f95),
    (0x3feffff2f5fefcaa, 0x3f05c540b4936fd2),
    (0x3feffff39fe16963, 0x3f04b581b8d170fc),
    (0x3feffff44178c8d2, 0x3f03b2652b06c2b2),
    (0x3feffff4db27f146, 0x3f02bb5cc22e5db6),
    (0x3feffff56d4d5e5e, 0x3f01cfe010e2052d),
    (0x3feffff5f8435efc, 0x3f00ef6c4c84a0fe),
    (0x3feffff67c604180, 0x3f001984165a5f36),
    (0x3feffff6f9f67e55, 0x3efe9b5e8d00ce77),
    (0x3feffff77154e0d6, 0x3efd16f5716c6c1a),
    (0x3feffff7e2c6aea2, 0x3efba4f035d60e03),
    (0x3feffff84e93cd75, 0x3efa447b7b03f045),
    (0x3feffff8b500e77c, 0x3ef8f4ccca7fc90d),
    (0x3feffff9164f8e46, 0x3ef7b5223dac7336),
    (0x3feffff972be5c59, 0x3ef684c227fcacef),
    (0x3feffff9ca891572, 0x3ef562fac4329b48),
    (0x3feffffa1de8c582, 0x3ef44f21e49054f2),
    (0x3feffffa6d13de73, 0x3ef34894a5e24657),
    (0x3feffffab83e54b8, 0x3ef24eb7254ccf83),
    (0x3feffffaff99bac4, 0x3ef160f438c70913),
    (0x3feffffb43555b5f, 0x3ef07ebd2a2d2844),
    (0x3feffffb839e52f3, 0x3eef4f12e9ab070a),
    (0x3feffffbc09fa7cd, 0x3eedb5ad0b27805c),
    (0x3feffffbfa82616b, 0x3eec304efa2c6f4e),
    (0x3feffffc316d9ed0, 0x3eeabe09e9144b5e),
    (0x3feffffc6586abf6, 0x3ee95df988e76644),
    (0x3feffffc96f1165e, 0x3ee80f439b4ee04b),
    (0x3feffffcc5cec0c1, 0x3ee6d11788a69c64),
    (0x3feffffcf23ff5fc, 0x3ee5a2adfa0b4bc4),
    (0x3feffffd1c637b2b, 0x3ee4834877429b8f),
    (0x3feffffd4456a10d, 0x3ee37231085c7d9a),
    (0x3feffffd6a3554a1, 0x3ee26eb9daed6f7e),
    (0x3feffffd8e1a2f22, 0x3ee1783ceac28910),
    (0x3feffffdb01e8546, 0x3ee08e1badf0fced),
    (0x3feffffdd05a75ea, 0x3edf5f7d88472604),
    (0x3feffffdeee4f810, 0x3eddb92b5212fb8d),
    (0x3feffffe0bd3e852, 0x3edc282cd3957eda),
    (0x3feffffe273c15b7, 0x3edaab7abace48dc),
    (0x3feffffe41314e06, 0x3ed94219bfcb4928),
    (0x3feffffe59c6698b, 0x3ed7eb1a2075864e),
    (0x3feffffe710d565e, 0x3ed6a597219a93da),
    (0x3feffffe8717232d, 0x3ed570b69502f313),
    (0x3feffffe9bf4098c, 0x3ed44ba864670882),
    (0x3feffffeafb377d5, 0x3ed335a62115bce2),
    (0x3feffffec2641a9e, 0x3ed22df298214423),
    (0x3feffffed413e5b7, 0x3ed133d96ae7e0dd),
    (0x3feffffee4d01cd6, 0x3ed046aeabcfcdec),
    (0x3feffffef4a55bd4, 0x3ececb9cfe1d8642),
    (0x3fefffff039f9e8f, 0x3ecd21397ead99cb),
    (0x3fefffff11ca4876, 0x3ecb8d094c86d374),
    (0x3fefffff1f302bc1, 0x3eca0df0f0c626dc),
    (0x3fefffff2bdb904d, 0x3ec8a2e269750a39),
    (0x3fefffff37d63a36, 0x3ec74adc8f4064d3),
    (0x3fefffff43297019, 0x3ec604ea819f007c),
    (0x3fefffff4dde0118, 0x3ec4d0231928c6f9),
    (0x3fefffff57fc4a95, 0x3ec3aba85fe22e20),
    (0x3fefffff618c3da6, 0x3ec296a70f414053),
    (0x3fefffff6a956450, 0x3ec1905613b3abf2),
    (0x3fefffff731ee681, 0x3ec097f6156f32c5),
    (0x3fefffff7b2f8ed6, 0x3ebf59a20caf6695),
    (0x3fefffff82cdcf1b, 0x3ebd9c73698fb1dc),
    (0x3fefffff89ffc4aa, 0x3ebbf716c6168bae),
    (0x3fefffff90cb3c81, 0x3eba6852c6b58392),
    (0x3fefffff9735b73b, 0x3eb8eefd70594a89),
    (0x3fefffff9d446ccc, 0x3eb789fb715aae95),
    (0x3fefffffa2fc5015, 0x3eb6383f726a8e04),
    (0x3fefffffa8621251, 0x3eb4f8c96f26a26a),
    (0x3fefffffad7a2652, 0x3eb3caa61607f920),
    (0x3fefffffb248c39d, 0x3eb2acee2f5ecdb8),
    (0x3fefffffb6d1e95d, 0x3eb19ec60b1242ed),
    (0x3fefffffbb196132, 0x3eb09f5cf4dd2877),
    (0x3fefffffbf22c1e2, 0x3eaf5bd95d8730d8),
    (0x3fefffffc2f171e3, 0x3ead9371e2ff7c35),
    (0x3fefffffc688a9cf, 0x3eabe41de54d155a),
    (0x3fefffffc9eb76ac, 0x3eaa4c89e08ef4f3),
    (0x3fefffffcd1cbc28, 0x3ea8cb738399b12c),
    (0x3fefffffd01f36af, 0x3ea75fa8dbc84bec),
    (0x3fefffffd2f57d68, 0x3ea608078a70dcbc),
    (0x3fefffffd5a2041f, 0x3ea4c37c0394d094),
    (0x3fefffffd8271d12, 0x3ea39100d5687bfe),
    (0x3fefffffda86faa9, 0x3ea26f9df8519bd7),
    (0x3fefffffdcc3b117, 0x3ea15e6827001f18),
    (0x3fefffffdedf37ed, 0x3ea05c803e4831c1),
    (0x3fefffffe0db6b91, 0x3e9ed22548cffd35),
    (0x3fefffffe2ba0ea5, 0x3e9d06ad6ecdf971),
    (0x3fefffffe47ccb60, 0x3e9b551c847fbc96),
    (0x3fefffffe62534d4, 0x3e99bc09f112b494),
    (0x3fefffffe7b4c81e, 0x3e983a1ff0aa239d),
    (0x3fefffffe92ced93, 0x3e96ce1aa3fd7bdd),
    (0x3fefffffea8ef9cf, 0x3e9576c72b514859),
    (0x3fefffffebdc2ec6, 0x3e943302cc4a0da8),
    (0x3fefffffed15bcba, 0x3e9301ba221dc9bb),
    (0x3fefffffee3cc32c, 0x3e91e1e857adc568),
    (0x3fefffffef5251c2, 0x3e90d2966b1746f7),
    (0x3feffffff0576917, 0x3e8fa5b4f49cc6b2),
    (0x3feffffff14cfb92, 0x3e8dc3ae30b55c16),
    (0x3feffffff233ee1d, 0x3e8bfd7555a3bd68),
    (0x3feffffff30d18e8, 0x3e8a517d9e61628a),
    (0x3feffffff3d9480f, 0x3e88be4f8f6c951f),
    (0x3feffffff4993c46, 0x3e874287ded49339),
    (0x3feffffff54dab72, 0x3e85dcd669f2cd34),
    (0x3feffffff5f74141, 0x3e848bfd38302871),
    (0x3feffffff6969fb8, 0x3e834ecf8a3c124a),
    (0x3feffffff72c5fb6, 0x3e822430f521cbcf),
    (0x3feffffff7b91176, 0x3e810b1488aeb235),
    (0x3feffffff83d3d07, 0x3e80027c00a263a6),
    (0x3feffffff8b962be, 0x3e7e12ee004efc37),
    (0x3feffffff92dfba2, 0x3e7c3e44ae32b16b),
    (0x3feffffff99b79d2, 0x3e7a854ea14102a8),
    (0x3feffffffa0248e8, 0x3e78e6761569f45d),
    (0x3feffffffa62ce54, 0x3e77603bac345f65),
    (0x3feffffffabd69b4, 0x3e75f1353cdad001),
    (0x3feffffffb127525, 0x3e74980cb3c80949),
    (0x3feffffffb624592, 0x3e73537f00b6ad4d),
    (0x3feffffffbad2aff, 0x3e72225b12bffc68),
    (0x3feffffffbf370cd, 0x3e710380e1adb7e9),
    (0x3feffffffc355dfd, 0x3e6febc107d5efaa),
    (0x3feffffffc733572, 0x3e6df0f2a0ee6947),
    (0x3feffffffcad3626, 0x3e6c14b2188bcee4),
    (0x3feffffffce39b67, 0x3e6a553644f7f07d),
    (0x3feffffffd169d0c, 0x3e68b0cfce0579e0),
    (0x3feffffffd466fa5, 0x3e6725e7c5dd20f7),
    (0x3feffffffd7344aa, 0x3e65b2fe547a1340),
    (0x3feffffffd9d4aab, 0x3e6456a974e92e93),
    (0x3feffffffdc4ad7a, 0x3e630f93c3699078),
    (0x3feffffffde9964e, 0x3e61dc7b5b978cf8),
    (0x3feffffffe0c2bf0, 0x3e60bc30c5d52f15),
    (0x3feffffffe2c92db, 0x3e5f5b2be65a0c7f),
    (0x3feffffffe4aed5e, 0x3e5d5f3a8dea7357),
    (0x3feffffffe675bbd, 0x3e5b82915b03515b),
    (0x3feffffffe81fc4e, 0x3e59c3517e789488),
    (0x3feffffffe9aeb97, 0x3e581fb7df06136e),
    (0x3feffffffeb24467, 0x3e56961b8d641d06),
    (0x3feffffffec81ff2, 0x3e5524ec4d916cae),
    (0x3feffffffedc95e7, 0x3e53cab1343d18d1),
    (0x3feffffffeefbc85, 0x3e52860757487a01),
    (0x3fefffffff01a8b6, 0x3e5155a09065d4f7),
    (0x3fefffffff126e1e, 0x3e50384250e4c9fc),
    (0x3fefffffff221f30, 0x3e4e59890b926c78),
    (0x3fefffffff30cd3f, 0x3e4c642116a8a9e3),
    (0x3fefffffff3e8892, 0x3e4a8e405e651ab6),
    (0x3fefffffff4b606f, 0x3e48d5f98114f872),
    (0x3fefffffff57632d, 0x3e47397c5a66e307),
    (0x3fefffffff629e44, 0x3e45b71456c5a4c4),
    (0x3fefffffff6d1e56, 0x3e444d26de513197),
    (0x3fefffffff76ef3f, 0x3e42fa31d6371537),
    (0x3fefffffff801c1f, 0x3e41bcca373b7b43),
    (0x3fefffffff88af67, 0x3e40939ab853339f),
    (0x3fefffffff90b2e3, 0x3e3efac5187b2863),
    (0x3fefffffff982fc1, 0x3e3cf1e86235d0e7),
    (0x3fefffffff9f2e9f, 0x3e3b0a68a2128bab),
    (0x3fefffffffa5b790, 0x3e39423165bc4444),
    (0x3fefffffffabd229, 0x3e37974e743dea3d),
    (0x3fefffffffb18582, 0x3e3607e9eacd1050),
    (0x3fefffffffb6d844, 0x3e34924a74dec729),
    (0x3fefffffffbbd0aa, 0x3e3334d19e0c2160),
    (0x3fefffffffc0748f, 0x3e31edfa3c5f5cca),
    (0x3fefffffffc4c96c, 0x3e30bc56f1b54701),
    (0x3fefffffffc8d462, 0x3e2f3d2185e047d9),
    (0x3fefffffffcc9a41, 0x3e2d26cb87945e87),
    (0x3fefffffffd01f89, 0x3e2b334fac4b9f99),
    (0x3fefffffffd36871, 0x3e296076f7918d1c),
    (0x3fefffffffd678ed, 0x3e27ac2d72fc2c63),
    (0x3fefffffffd954ae, 0x3e2614801550319e),
    (0x3fefffffffdbff2a, 0x3e24979ac8b28927),
    (0x3fefffffffde7ba0, 0x3e2333c68e2d0548),
    (0x3fefffffffe0cd16, 0x3e21e767bce37dd7),
    (0x3fefffffffe2f664, 0x3e20b0fc5b6d05a0),
    (0x3fefffffffe4fa30, 0x3e1f1e3523b41d7d),
    (0x3fefffffffe6daf7, 0x3e1d00de6608effe),
    (0x3fefffffffe89b0c, 0x3e1b0778b7b3301b),
    (0x3fefffffffea3c9a, 0x3e192fb04ec0f6cf),
    (0x3fefffffffebc1a9, 0x3e177756ec9f78fa),
    (0x3fefffffffed2c21, 0x3e15dc61922d5a06),
    (0x3fefffffffee7dc8, 0x3e145ce65699ff6d),
    (0x3fefffffffefb847, 0x3e12f71a5f159970),
    (0x3feffffffff0dd2b, 0x3e11a94ff571654f),
    (0x3feffffffff1ede9, 0x3e1071f4bbea09ec),
    (0x3feffffffff2ebda, 0x3e0e9f1ff8ddd774),
    (0x3feffffffff3d843, 0x3e0c818223a202c7),
    (0x3feffffffff4b453, 0x3e0a887bd2b4404d),
    (0x3feffffffff58126, 0x3e08b1a336c5eb6b),
    (0x3feffffffff63fc3, 0x3e06fab63324088a),
    (0x3feffffffff6f121, 0x3e056197e30205ba),
    (0x3feffffffff79626, 0x3e03e44e45301b92),
    (0x3feffffffff82fab, 0x3e0281000bfe4c3f),
    (0x3feffffffff8be77, 0x3e0135f28f2d50b4),
    (0x3feffffffff94346, 0x3e000187dded5975),
    (0x3feffffffff9bec8, 0x3dfdc479de0ef001),
    (0x3feffffffffa319f, 0x3dfbad4fdad3caa1),
    (0x3feffffffffa9c63, 0x3df9baed3ed27ab8),
    (0x3feffffffffaffa4, 0x3df7ead9ce4285bb),
    (0x3feffffffffb5be5, 0x3df63ac6b4edc88e),
    (0x3feffffffffbb1a2, 0x3df4a88be2a6390c),
    (0x3feffffffffc014e, 0x3df332259185f1a0),
    (0x3feffffffffc4b56, 0x3df1d5b1f3793044),
    (0x3feffffffffc901c, 0x3df0916f04b6e18b),
    (0x3feffffffffccfff, 0x3deec77101de6926),
    (0x3feffffffffd0b56, 0x3dec960bf23153e0),
    (0x3feffffffffd4271, 0x3dea8bd20fc65ef7),
    (0x3feffffffffd759d, 0x3de8a61745ec7d1d),
    (0x3feffffffffda520, 0x3de6e25d0e756261),
    (0x3feffffffffdd13c, 0x3de53e4f7d1666cb),
    (0x3feffffffffdfa2d, 0x3de3b7c27a7ddb0e),
    (0x3feffffffffe202d, 0x3de24caf2c32af14),
    (0x3feffffffffe4371, 0x3de0fb3186804d0f),
    (0x3feffffffffe642a, 0x3ddf830c0bb41fd7),
    (0x3feffffffffe8286, 0x3ddd3c0f1a91c846),
    (0x3feffffffffe9eb0, 0x3ddb1e5acf351d87),
    (0x3feffffffffeb8d0, 0x3dd92712d259ce66),
    (0x3feffffffffed10a, 0x3dd7538c60a04476),
    (0x3feffffffffee782, 0x3dd5a14b04b47879),
    (0x3feffffffffefc57, 0x3dd40dfd87456f4c),
    (0x3fefffffffff0fa7, 0x3dd2977b1172b9d5),
    (0x3fefffffffff218f, 0x3dd13bc07e891491),
    (0x3fefffffffff3227, 0x3dcff1dbb4300811),
    (0x3fefffffffff4188, 0x3dcd9a880f306bd8),
    (0x3fefffffffff4fc9, 0x3dcb6e45220b55e0),
    (0x3fefffffffff5cfd, 0x3dc96a0b33f2c4da),
    (0x3fefffffffff6939, 0x3dc78b07e9e924ac),
    (0x3fefffffffff748e, 0x3dc5ce9ab1670dd2),
    (0x3fefffffffff7f0d, 0x3dc4325167006bb0),
    (0x3fefffffffff88c5, 0x3dc2b3e53538ff3f),
    (0x3fefffffffff91c6, 0x3dc15137a7f44864),
    (0x3fefffffffff9a1b, 0x3dc0084ff125639d),
    (0x3fefffffffffa1d2, 0x3dbdaeb0b7311ec7),
    (0x3fefffffffffa8f6, 0x3dbb7937d1c40c53),
    (0x3fefffffffffaf92, 0x3db96d082f59ab06),
    (0x3fefffffffffb5b0, 0x3db7872d9fa10aad),
    (0x3fefffffffffbb58, 0x3db5c4e8e37bc7d0),
    (0x3fefffffffffc095, 0x3db423ac0df49a40),
    (0x3fefffffffffc56d, 0x3db2a117230ad284),
    (0x3fefffffffffc9e8, 0x3db13af4f04f9998),
    (0x3fefffffffffce0d, 0x3dafde703724e560),
    (0x3fefffffffffd1e1, 0x3dad77f0c82e7641),
    (0x3fefffffffffd56c, 0x3dab3ee02611d7dd),
    (0x3fefffffffffd8b3, 0x3da92ff33023d5bd),
    (0x3fefffffffffdbba, 0x3da7481a9e69f53f),
    (0x3fefffffffffde86, 0x3da5847eda620959),
    (0x3fefffffffffe11d, 0x3da3e27c1fcc74bd),
    (0x3fefffffffffe380, 0x3da25f9ee0b923dc),
    (0x3fefffffffffe5b6, 0x3da0f9a068653200),
    (0x3fefffffffffe7c0, 0x3d9f5cc7718082b0),
    (0x3fefffffffffe9a2, 0x3d9cf7e53d6a2ca5),
    (0x3fefffffffffeb60, 0x3d9ac0f5f3229372),
    (0x3fefffffffffecfb, 0x3d98b498644847ea),
    (0x3fefffffffffee77, 0x3d96cfa9bcca59dc),
    (0x3fefffffffffefd6, 0x3d950f411d4fd2cd),
    (0x3feffffffffff11a, 0x3d9370ab8327af5e),
    (0x3feffffffffff245, 0x3d91f167f88c6b6e),
    (0x3feffffffffff359, 0x3d908f24085d4597),
    (0x3feffffffffff457, 0x3d8e8f70e181d61a),
    (0x3feffffffffff542, 0x3d8c324c20e337dc),
    (0x3feffffffffff61b, 0x3d8a03261574b54e),
    (0x3feffffffffff6e3, 0x3d87fe903cdf5855),
    (0x3feffffffffff79b, 0x3d86215c58da3450),
    (0x3feffffffffff845, 0x3d846897d4b69fc6),
    (0x3feffffffffff8e2, 0x3d82d1877d731b7b),
    (0x3feffffffffff973, 0x3d8159a386b11517),
    (0x3feffffffffff9f8, 0x3d7ffd27ae9393ce),
    (0x3feffffffffffa73, 0x3d7d7c593130dd0b),
    (0x3feffffffffffae4, 0x3d7b2cd607c79bcf),
    (0x3feffffffffffb4c, 0x3d790ae4d3405651),
    (0x3feffffffffffbad, 0x3d771312dd1759e2),
    (0x3feffffffffffc05, 0x3d75422ef5d8949d),
    (0x3feffffffffffc57, 0x3d739544b0ecc957),
    (0x3feffffffffffca2, 0x3d720997f73e73dd),
    (0x3feffffffffffce7, 0x3d709ca0eaacd277),
    (0x3feffffffffffd27, 0x3d6e9810295890ec),
    (0x3feffffffffffd62, 0x3d6c2b45b5aa4a1d),
    (0x3feffffffffffd98, 0x3d69eee068fa7596),
    (0x3feffffffffffdca, 0x3d67df2b399c10a8),
    (0x3feffffffffffdf8, 0x3d65f8b87a31bd85),
    (0x3feffffffffffe22, 0x3d64385c96e9a2d9),
    (0x3feffffffffffe49, 0x3d629b2933ef4cbc),
    (0x3feffffffffffe6c, 0x3d611e68a6378f8a),
    (0x3feffffffffffe8d, 0x3d5f7f338086a86b),
    (0x3feffffffffffeab, 0x3d5cf8d7d9ce040a),
    (0x3feffffffffffec7, 0x3d5aa577251ae485),
    (0x3feffffffffffee1, 0x3d58811d739efb5f),
    (0x3feffffffffffef8, 0x3d568823e52970be),
    (0x3fefffffffffff0e, 0x3d54b72ae68e8b4c),
    (0x3fefffffffffff22, 0x3d530b14dbe876bc),
    (0x3fefffffffffff34, 0x3d5181012ef86610),
    (0x3fefffffffffff45, 0x3d501647ba798745),
    (0x3fefffffffffff54, 0x3d4d90e917701675),
    (0x3fefffffffffff62, 0x3d4b2a87e86d0c8a),
    (0x3fefffffffffff6f, 0x3d48f53dcb377293),
    (0x3fefffffffffff7b, 0x3d46ed2f2515e933),
    (0x3fefffffffffff86, 0x3d450ecc9ed47f19),
    (0x3fefffffffffff90, 0x3d4356cd5ce7799e),
    (0x3fefffffffffff9a, 0x3d41c229a587ab78),
    (0x3fefffffffffffa2, 0x3d404e15ecc7f3f6),
    (0x3fefffffffffffaa, 0x3d3deffc7e6a6017),
    (0x3fefffffffffffb1, 0x3d3b7b040832f310),
    (0x3fefffffffffffb8, 0x3d3938e021f36d76),
    (0x3fefffffffffffbe, 0x3d37258610b3b233),
    (0x3fefffffffffffc3, 0x3d353d3bfc82a909),
    (0x3fefffffffffffc8, 0x3d337c92babdc2fd),
    (0x3fefffffffffffcd, 0x3d31e06010120f6a),
    (0x3fefffffffffffd1, 0x3d3065b9616170d4),
    (0x3fefffffffffffd5, 0x3d2e13dd96b3753b),
    (0x3fefffffffffffd9, 0x3d2b950d32467392),
    (0x3fefffffffffffdc, 0x3d294a72263259a5),
    (0x3fefffffffffffdf, 0x3d272fd93e036cdc),
    (0x3fefffffffffffe2, 0x3d254164576929ab),
    (0x3fefffffffffffe4, 0x3d237b83c521fe96),
    (0x3fefffffffffffe7, 0x3d21daf033182e96),
    (0x3fefffffffffffe9, 0x3d205ca50205d26a),
    (0x3fefffffffffffeb, 0x3d1dfbb6235639fa),
    (0x3fefffffffffffed, 0x3d1b7807e294781f),
    (0x3fefffffffffffee, 0x3d19298add70a734),
    (0x3feffffffffffff0, 0x3d170beaf9c7ffb6),
    (0x3feffffffffffff1, 0x3d151b2cd6709222),
    (0x3feffffffffffff3, 0x3d1353a6cf7f7fff),
    (0x3feffffffffffff4, 0x3d11b1fa8cbe84a7),
    (0x3feffffffffffff5, 0x3d10330f0fd69921),
    (0x3feffffffffffff6, 0x3d0da81670f96f9b),
    (0x3feffffffffffff7, 0x3d0b24a16b4d09aa),
    (0x3feffffffffffff7, 0x3d08d6eeb6efdbd6),
    (0x3feffffffffffff8, 0x3d06ba91ac734786),
    (0x3feffffffffffff9, 0x3d04cb7966770ab5),
    (0x3feffffffffffff9, 0x3d0305e9721d0981),
    (0x3feffffffffffffa, 0x3d01667311fff70a),
    (0x3feffffffffffffb, 0x3cffd3de10d62855),
    (0x3feffffffffffffb, 0x3cfd1aefbcd48d0c),
    (0x3feffffffffffffb, 0x3cfa9cc93c25aca9),
    (0x3feffffffffffffc, 0x3cf85487ee3ea735),
    (0x3feffffffffffffc, 0x3cf63daf8b4b1e0c),
    (0x3feffffffffffffd, 0x3cf45421e69a6ca1),
    (0x3feffffffffffffd, 0x3cf294175802d99a),
    (0x3feffffffffffffd, 0x3cf0fa17bf41068f),
    (0x3feffffffffffffd, 0x3cef05e82aae2bb9),
    (0x3feffffffffffffe, 0x3cec578101b29058),
    (0x3feffffffffffffe, 0x3ce9e39dc5dd2f7c),
    (0x3feffffffffffffe, 0x3ce7a553a728bbf2),
    (0x3feffffffffffffe, 0x3ce5982008db1304),
    (0x3feffffffffffffe, 0x3ce3b7e00422e51b),
    (0x3feffffffffffffe, 0x3ce200c898d9ee3e),
    (0x3fefffffffffffff, 0x3ce06f5f7eb65a56),
    (0x3fefffffffffffff, 0x3cde00e9148a1d25),
    (0x3fefffffffffffff, 0x3cdb623734024e92),
    (0x3fefffffffffffff, 0x3cd8fd4e01891bf8),
    (0x3fefffffffffffff, 0x3cd6cd44c7470d89),
    (0x3fefffffffffffff, 0x3cd4cd9c04158cd7),
    (0x3fefffffffffffff, 0x3cd2fa34bf5c8344),
    (0x3fefffffffffffff, 0x3cd14f4890ff2461),
    (0x3fefffffffffffff, 0x3ccf92c49dfa4df5),
    (0x3fefffffffffffff, 0x3ccccaaea71ab0df),
    (0x3fefffffffffffff, 0x3cca40829f001197),
    (0x3ff0000000000000, 0x3cc7eef13b59e96c),
    (0x3ff0000000000000, 0x3cc5d11e1a252bf5),
    (0x3ff0000000000000, 0x3cc3e296303b2297),
    (0x3ff0000000000000, 0x3cc21f47009f43ce),
    (0x3ff0000000000000, 0x3cc083768c5e4542),
    (0x3ff0000000000000, 0x3cbe1777d831265f),
    (0x3ff0000000000000, 0x3cbb69f10b0191b5),
    (0x3ff0000000000000, 0x3cb8f8a3a05b5b53),
    (0x3ff0000000000000, 0x3cb6be573c40c8e7),
    (0x3ff0000000000000, 0x3cb4b645ba991fdb),
    (0x3ff0000000000000, 0x3cb2dc119095729f),
];

/// `(erfc(r), scale(r))` scaled by `2^128` for `r = i / 64` in `[0, 27.25]`
pub(crate) static ERFC_TABLE: [(u64, u64); 1745] = [
    (0x47f0000000000000, 0x47f20dd750429b6d),
    (0x47ef6f9447be0743, 0x47f20cb67bd452c7),
    (0x47eedf3a9ba22dad, 0x47f209546ad13ccf),
    (0x47ee4f05010eca8c, 0x47f203b261cd0053),
    (0x47edbf056fe2df35, 0x47f1fbd27cdc72d3),
    (0x47ed2f4dcbc2f894, 0x47f1f1b7ae44867f),
    (0x47ec9fefdd6eaf19, 0x47f1e565bca400d4),
    (0x47ec10fd4c26e896, 0x47f1d6e14099944a),
    (0x47eb82879728f11e, 0x47f1c62fa1e869b6),
    (0x47eaf4a00f426daa, 0x47f1b357141d95d5),
    (0x47ea6757d08215d8, 0x47f19e5e92b964ab),
    (0x47e9dabfbc090901, 0x47f1874ddcdfce24),
    (0x47e94ee8720076b6, 0x47f16e2d7093cd8c),
    (0x47e8c3e24bb73372, 0x47f153068581b781),
    (0x47e839bd55eaafc8, 0x47f135e3075d076b),
    (0x47e7b0894b3ea35c, 0x47f116cd8fd67618),
    (0x47e728558ee694fc, 0x47f0f5d1602f7e41),
    (0x47e6a13127843ec1, 0x47f0d2fa5a70c168),
    (0x47e61b2aba3da093, 0x47f0ae54fa490723),
    (0x47e59650860d6469, 0x47f087ee4d9ad247),
    (0x47e512b05f5006e1, 0x47f05fd3ecbec298),
    (0x47e49057ab900447, 0x47f03613f2812daf),
    (0x47e40f535d93160e, 0x47f00abcf3e187a9),
    (0x47e38faff1aa574a, 0x47efbbbbef34b4b2),
    (0x47e311796a46f064, 0x47ef5f0cdaf15313),
    (0x47e294bb4cd4b2bd, 0x47eeff8c4b1375db),
    (0x47e219809edbd524, 0x47ee9d5a8e4c934e),
    (0x47e19fd3e36ac96a, 0x47ee38988fc46e72),
    (0x47e127bf18c8eadc, 0x47edd167c4cf9d2a),
    (0x47e0b14bb6728cd8, 0x47ed67ea1a8b5368),
    (0x47e03c82ab5eb831, 0x47ecfc41e36c7df9),
    (0x47df92d8b91d5cc7, 0x47ec8e91c4d01368),
    (0x47deb02147ce245c, 0x47ec1efca49a5011),
    (0x47ddd0ed9ea4bdd6, 0x47ebada596f25436),
    (0x47dcf54b4058455f, 0x47eb3aafcc27502e),
    (0x47dc1d4695e87644, 0x47eac63e7ecc1411),
    (0x47db48eaee924501, 0x47ea5074e2157620),
    (0x47da78428050527e, 0x47e9d97610879642),
    (0x47d9ab5668e4930a, 0x47e96164fafd8de3),
    (0x47d8e22eaf68291e, 0x47e8e86458169af8),
    (0x47d81cd2465e1d96, 0x47e86e9694134b9e),
    (0x47d75b470e454d35, 0x47e7f41dc12c9e89),
    (0x47d69d91d8a595da, 0x47e7791b886e7403),
    (0x47d5e3b66b9405a9, 0x47e6fdb11b1e0c34),
    (0x47d52db785a98aca, 0x47e681ff24b4ab04),
    (0x47d47b96e267647a, 0x47e60625bd75d07b),
    (0x47d3cd553f045d45, 0x47e58a445da7c74c),
    (0x47d322f25f9da2fd, 0x47e50e79d1749ac9),
    (0x47d27c6d14c5e341, 0x47e492e42d78d2c5),
    (0x47d1d9c3416d2b4b, 0x47e417a0c4049fd0),
    (0x47d13af1e11be721, 0x47e39ccc1b136d5a),
    (0x47d09ff50e7b3f93, 0x47e32281e2fd1a92),
    (0x47d008c80a24ff10, 0x47e2a8dcede3673b),
    (0x47ceeaca836a27cc, 0x47e22ff727dd6f7b),
    (0x47cdcb8cae2d747f, 0x47e1b7e98fe26217),
    (0x47ccb3c8500ea349, 0x47e140cc3173f007),
    (0x47cba36dab91c0e9, 0x47e0cab61f084b93),
    (0x47ca9a6b99fc973b, 0x47e055bd6d32e8d7),
    (0x47c998af9b56a3ae, 0x47dfc3ee5d1524b0),
    (0x47c89e25e6a4cef9, 0x47dedeeee0959518),
    (0x47c7aab97a554544, 0x47ddfca26f5bbf88),
    (0x47c6be542ccffc2f, 0x47dd1d2cfff91594),
    (0x47c5d8debd20aace, 0x47dc40b0729ed548),
    (0x47c4fa40e3af3674, 0x47db674c8ffc6283),
    (0x47c4226162fbddd5, 0x47da911f096fbc26),
    (0x47c351261854b991, 0x47d9be437a7de946),
    (0x47c286740c7a7dab, 0x47d8eed36b886d93),
    (0x47c1c22f842ac1f2, 0x47d822e655b417e7),
    (0x47c1043c1086777d, 0x47d75a91a7f4d2ed),
    (0x47c04c7c9f4b9690, 0x47d695e8cd31867e),
    (0x47bf35a715b2f3e1, 0x47d5d4fd33729015),
    (0x47bdde4553ef94de, 0x47d517de540ce2a3),
    (0x47bc9296beb09cf1, 0x47d45e99bcbb7915),
    (0x47bb525d5198cb1c, 0x47d3a93b1998736c),
    (0x47ba1d5a5c4edb96, 0x47d2f7cc3fe6f423),
    (0x47b8f34e9f8f93a6, 0x47d24a55399ea239),
    (0x47b7d3fa69816db5, 0x47d1a0dc51a9934d),
    (0x47b6bf1db13f3983, 0x47d0fb6620c550af),
    (0x47b5b478318ff939, 0x47d059f59af7a906),
    (0x47b4b3c982c338c7, 0x47cf79183b101c5b),
    (0x47b3bcd133aa0ffc, 0x47ce4652fadcb6b2),
    (0x47b2cf4ee1a5f0fc, 0x47cd1b982c501370),
    (0x47b1eb024fc75285, 0x47cbf8e1b1ca2279),
    (0x47b10fab7cf72f94, 0x47cade26b7fbed95),
    (0x47b03d0ab9273b94, 0x47c9cb5bd549b111),
    (0x47aee5c1730b147c, 0x47c8c07329874652),
    (0x47ad61dd57628999, 0x47c7bd5c7df3fe9c),
    (0x47abedec8fddb340, 0x47c6c205655be720),
    (0x47aa8973c4b5c03e, 0x47c5ce595c455b0a),
    (0x47a933f8f6375f2c, 0x47c4e241e912c305),
    (0x47a7ed039b24c96b, 0x47c3fda6bc016994),
    (0x47a6b41cbd198bc8, 0x47c3206dceef5f87),
    (0x47a588cf12f4446b, 0x47c24a7b84d38971),
    (0x47a46aa7194bd324, 0x47c17bb2c8d41535),
    (0x47a3593328f6abbe, 0x47c0b3f52ce8c383),
    (0x47a254038bac19d6, 0x47bfe6460fef4680),
    (0x47a15aaa8ec85205, 0x47be723726b824a9),
    (0x47a06cbc943d255a, 0x47bd0b7a0f921e7c),
    (0x479f13a043742333, 0x47bbb1c972f23e50),
    (0x479d62fbdc2e756b, 0x47ba64de673e8837),
    (0x479bc6c1da1f3121, 0x47b92470a61b6965),
    (0x479a3e2cb2ae9edb, 0x47b7f036c0107294),
    (0x4798c87b7a37834f, 0x47b6c7e64e7281cb),
    (0x479764f1f1f6ddea, 0x47b5ab342383d178),
    (0x479612d893085125, 0x47b499d478bca735),
    (0x4794d17c968d062b, 0x47b3937b1b31925a),
    (0x4793a02ffb1b7cee, 0x47b297db960e4f63),
    (0x47927e49879737d3, 0x47b1a6a95b1e786f),
    (0x47916b24cb8f8f92, 0x47b0bf97e95f2a64),
    (0x479066221d4539d8, 0x47afc4b5e32d6259),
    (0x478edd4d2aec5adb, 0x47ae1d4cf1e2450a),
    (0x478d0838121f2418, 0x47ac885df3451a07),
    (0x478b4be201caa4b4, 0x47ab055303221015),
    (0x4789a7315f1d6a55, 0x47a993979e14fffe),
    (0x47881915cb0e3323, 0x47a83298d717210e),
    (0x4786a08807632262, 0x47a6e1c5893c380b),
    (0x47853c89d8bb3ddb, 0x47a5a08e85af27e0),
    (0x4783ec25e5d5af12, 0x47a46e66be002240),
    (0x4782ae6f94510dd8, 0x47a34ac36ad8dafe),
    (0x47818282e31ba3e8, 0x47a2351c2f2d1449),
    (0x4780678442cc256f, 0x47a12ceb37ff9bc3),
    (0x477eb940d8319831, 0x47a031ad58d56279),
    (0x477cc218694238a2, 0x479e85c449e377f3),
    (0x477ae808c479c371, 0x479cc0180af00a8b),
    (0x4779299afa0246a6, 0x479b1160991ff737),
    (0x477785674053e8b9, 0x479978ae8b55ce1b),
    (0x4775fa14942c3d54, 0x4797f5188610ddc8),
    (0x4774865856ff632a, 0x479685bb5134ef13),
    (0x477328f5ec350e67, 0x479529b9e8cf9a1e),
    (0x4771e0be557fa673, 0x4793e03d891b37de),
    (0x4770ac8fce979b96, 0x4792a875b5ffab56),
    (0x476f16aad1422a55, 0x479181983e5133dd),
    (0x476cf80d4afc3019, 0x47906ae13b0d3255),
    (0x476afb4e269693df, 0x478ec72615a894c4),
    (0x47691e8bd0830a74, 0x478cd5ec93c12432),
    (0x47675ffb3e6519a0, 0x478b00b38d6b3575),
    (0x4765bde729a6b60f, 0x47894624e78e0faf),
    (0x476436af4c058acb, 0x4787a4f6aca256cb),
    (0x4762c8c79e6f04a3, 0x47861beae53b72b7),
    (0x476172b79a7a1181, 0x4784a9cf6bda3f4c),
    (0x476033197ec68c0e, 0x47834d7dbc76d7e5),
    (0x475e11332d0714c5, 0x478205dac02bd6b9),
    (0x475be3eb08ae7c20, 0x4780d1d69569b82d),
    (0x4759dbf721b98dfa, 0x477f60d8aa2a88f2),
    (0x4757f713f9cc9784, 0x477d4143a9dfe965),
    (0x4756331caf57b5db, 0x477b430ecf4a83a8),
    (0x47548e09b21414bf, 0x4779646f35a76624),
    (0x475305ef7fdbfb95, 0x4777a3ade6c8b3e5),
    (0x475198fd6a0ee7bd, 0x4775ff2750fe7820),
    (0x4750457c63a96690, 0x4774754abacdf1dc),
    (0x474e139bb05eb49e, 0x47730499b503957f),
    (0x474bc8d516fda8ba, 0x4771aba78ba3af89),
    (0x4749a7c305336484, 0x47706918b6355624),
    (0x4747adadead962ed, 0x476e77448fb66bb9),
    (0x4745d80693276a6d, 0x476c4412bf4b8f0b),
    (0x474424642c28ff75, 0x476a3645330550ff),
    (0x47429082600643fd, 0x47684ba3004a50d0),
    (0x47411a3f7ffbbfea, 0x4766821000795a03),
    (0x473f7f3581a4dc2c, 0x4764d78bba8ca5fd),
    (0x473cfd6511405b2d, 0x47634a305080681f),
    (0x473aab859b20ac9e, 0x4761d83170fbf6fb),
    (0x473886470ad946a7, 0x47607fdb4dafea5f),
    (0x47368a8e4b2fc8c2, 0x475e7f232d9e2630),
    (0x4734b572664bd2dc, 0x475c2b9cf7f893bf),
    (0x47330439c56dadf6, 0x475a024365f771bd),
    (0x473174578f6efd5d, 0x4758005f08d6f1ef),
    (0x473003692548d98b, 0x4756235fbd7a4345),
    (0x472d5e6777a83c2a, 0x475468dadf4080ab),
    (0x472aeb4423e690e7, 0x4752ce898809244e),
    (0x4728a98484a1e8d3, 0x47515246dda49d47),
    (0x472695875fb574a0, 0x474fe41cd9bb4eee),
    (0x4724abea183bc470, 0x474d57f524723822),
    (0x4722e984ed53e777, 0x474afc85e0f82e12),
    (0x47214b67693928cf, 0x4748ce75e9f6f8a0),
    (0x471f9da9fde95755, 0x4746caa0d3582fe9),
    (0x471ce283a9e3e330, 0x4744ee1429bf7cc0),
    (0x471a609f7584d32b, 0x4743360ccd23db3a),
    (0x4718139690c0d187, 0x47419ff4663ae9df),
    (0x4715f7524a8e81a2, 0x4740295ef6591848),
    (0x47140806eb78e353, 0x473da01102b5f851),
    (0x4712422ed95a3235, 0x473b23a5a23e4210),
    (0x4710a2860115569c, 0x4738d986a4187285),
    (0x470e4c0b066a4970, 0x4736be02102b3520),
    (0x470b93bf40d5eccb, 0x4734cda5374ea275),
    (0x470916f7c5f2f764, 0x47330538fbb77ecd),
    (0x4706d0e7045988cb, 0x473161be46ad3b50),
    (0x4704bd1bfa2aba3d, 0x472fc0d55470cf51),
    (0x4702d77bd3a382bc, 0x472cfd4a5adec5c0),
    (0x47011c3bed8e716a, 0x472a740684026555),
    (0x46ff0fb86d056745, 0x4728208bc334a6a5),
    (0x46fc2e43d417197b, 0x4725feada379d8b7),
    (0x46f98e25420092da, 0x47240a8c1949f75e),
    (0x46f729df6503422a, 0x4722408e9ba3327f),
    (0x46f4fc63c27c71ae, 0x47209d5f819c9e29),
    (0x46f3010aa198de78, 0x471e3bcf436a1a95),
    (0x46f1338b7e273194, 0x471b7e94604479dc),
    (0x46ef1febf7a916aa, 0x4718fdc1b2dcf7b9),
    (0x46ec2556a4e7a90f, 0x4716b4702d7d5849),
    (0x46e970b05888fda2, 0x47149e17724f4d41),
    (0x46e6fbdddeff308f, 0x4712b6875310f785),
    (0x46e4c144d984e1b8, 0x4710f9e1b4dd36df),
    (0x46e2bbc1d878d272, 0x470ec929a665b449),
    (0x46e0e69f27a37df3, 0x470be6abbb10a5aa),
    (0x46de7b1882bccac5, 0x47094637d5bacfdb),
    (0x46db792bbc489b04, 0x4706e2367dc27f95),
    (0x46d8c03d2d39119b, 0x4704b581b8d170fc),
    (0x46d649b01d73110a, 0x4702bb5cc22e5db6),
    (0x46d40f79420887c7, 0x4700ef6c4c84a0fe),
    (0x46d20c1303550f0e, 0x46fe9b5e8d00ce77),
    (0x46d03a72a2bbdc06, 0x46fba4f035d60e03),
    (0x46cd2bfc6210880a, 0x46f8f4ccca7fc90d),
    (0x46ca35068e9c89cf, 0x46f684c227fcacef),
    (0x46c7885ce9f67cdb, 0x46f44f21e49054f2),
    (0x46c51f06ad20e4c3, 0x46f24eb7254ccf83),
    (0x46c2f2aa92823e80, 0x46f07ebd2a2d2844),
    (0x46c0fd8160ca94a0, 0x46edb5ad0b27805c),
    (0x46be749309831666, 0x46eabe09e9144b5e),
    (0x46bb48774d0f8e45, 0x46e80f439b4ee04b),
    (0x46b86e0050236315, 0x46e5a2adfa0b4bc4),
    (0x46b5dd4af79906a9, 0x46e37231085c7d9a),
    (0x46b38f2e86f38216, 0x46e1783ceac28910),
    (0x46b17d2c50b2bfaf, 0x46df5f7d88472604),
    (0x46af42c17ae0ebf6, 0x46dc282cd3957eda),
    (0x46abeceb1f9f5b3d, 0x46d94219bfcb4928),
    (0x46a8ef2a9a18d857, 0x46d6a597219a93da),
    (0x46a640bf6745325e, 0x46d44ba864670882),
    (0x46a3d9be56279ee9, 0x46d22df298214423),
    (0x46a1b2fe32991d5c, 0x46d046aeabcfcdec),
    (0x469f8c0c2e2ce8de, 0x46cd21397ead99cb),
    (0x469c19fa87de37fb, 0x46ca0df0f0c626dc),
    (0x46990538b942ea7c, 0x46c74adc8f4064d3),
    (0x4696443fdcf0c327, 0x46c4d0231928c6f9),
    (0x4693ce784b411931, 0x46c296a70f414053),
    (0x46919c232fd50b88, 0x46c097f6156f32c5),
    (0x468f4c8c392fb944, 0x46bd9c73698fb1dc),
    (0x468bcd30dfbd611b, 0x46ba6852c6b58392),
    (0x4688aee4cd06ec1b, 0x46b789fb715aae95),
    (0x4685e77b6bbd2127, 0x46b4f8c96f26a26a),
    (0x46836dcf18a6465c, 0x46b2acee2f5ecdb8),
    (0x468139a7b37f8475, 0x46b09f5cf4dd2877),
    (0x467e87470e4f4246, 0x46ad9371e2ff7c35),
    (0x467b0a44aa2f067e, 0x46aa4c89e08ef4f3),
    (0x4677f064a8ba8323, 0x46a75fa8dbc84bec),
    (0x46752efdf060cd20, 0x46a4c37c0394d094),
    (0x4672bc82ab9d2302, 0x46a26f9df8519bd7),
    (0x467090640946d2d5, 0x46a05c803e4831c1),
    (0x466d45f15b49b35e, 0x469d06ad6ecdf971),
    (0x4669dacb2c432ef4, 0x4699bc09f112b494),
    (0x4666d3126d74b6cc, 0x4696ce1aa3fd7bdd),
    (0x466423d13a3b73e1, 0x46943302cc4a0da8),
    (0x4661c33cd3c37add, 0x4691e1e857adc568),
    (0x465f512dd15b73b7, 0x468fa5b4f49cc6b2),
    (0x465b9823c51276e1, 0x468bfd7555a3bd68),
    (0x46584d6fe15b6b93, 0x4688be4f8f6c951f),
    (0x465564a91cd221f0, 0x4685dcd669f2cd34),
    (0x4652d2c0909ebeb9, 0x46834ecf8a3c124a),
    (0x46508ddd13bd35e7, 0x46810b1488aeb235),
    (0x464d1a75065a8c74, 0x467e12ee004efc37),
    (0x46499218b8ac7f8e, 0x467a854ea14102a8),
    (0x464674c6ae60d852, 0x4677603bac345f65),
    (0x4643b62b6aafb0c8, 0x4674980cb3c80949),
    (0x46414b54042f445b, 0x4672225b12bffc68),
    (0x463e5510173b9a50, 0x466febc107d5efaa),
    (0x463a964ed354f984, 0x466c14b2188bcee4),
    (0x46374b179d1eba81, 0x4668b0cfce0579e0),
    (0x463465daafca8b1d, 0x4665b2fe547a1340),
    (0x4631da9433aebbcf, 0x46630f93c3699078),
    (0x462f3d41033c44cc, 0x4660bc30c5d52f15),
    (0x462b512a1fb1d8fc, 0x465d5f3a8dea7357),
    (0x4627e03b1cc6d738, 0x4659c3517e789488),
    (0x4624dbb989001d84, 0x4656961b8d641d06),
    (0x462236a197bf0b9a, 0x4653cab1343d18d1),
    (0x461fcae93fb7323c, 0x465155a09065d4f7),
    (0x461bbc1a022c14d4, 0x464e59890b926c78),
    (0x46182eedbe410407, 0x464a8e405e651ab6),
    (0x4615139a5f3661fb, 0x4647397c5a66e307),
    (0x46125c354b26cb4e, 0x46444d26de513197),
    (0x460ff8f84418d510, 0x4641bcca373b7b43),
    (0x460bd3474ec16ca5, 0x463efac5187b2863),
    (0x4608345858c4438d, 0x463b0a68a2128bab),
    (0x46050b75c536f927, 0x4637974e743dea3d),
    (0x460249ef1c3be817, 0x4634924a74dec729),
    (0x45ffc5b8748842b2, 0x4631edfa3c5f5cca),
    (0x45fb95cede6d524b, 0x462f3d2185e047d9),
    (0x45f7f03b935e8e3a, 0x462b334fac4b9f99),
    (0x45f4c389be9acb83, 0x4627ac2d72fc2c63),
    (0x45f2006aeb6bc768, 0x4624979ac8b28927),
    (0x45ef32ea02b55d23, 0x4621e767bce37dd7),
    (0x45eb05cfe2e99435, 0x461f1e3523b41d7d),
    (0x45e764f46cf19f9c, 0x461b0778b7b3301b),
    (0x45e43e56c3e340a7, 0x46177756ec9f78fa),
    (0x45e182380bd2f494, 0x46145ce65699ff6d),
    (0x45de45a9790460c1, 0x4611a94ff571654f),
    (0x45da284cb82c31ce, 0x460e9f1ff8ddd774),
    (0x45d697595326d7dc, 0x460a887bd2b4404d),
    (0x45d3807ab51436a8, 0x4606fab63324088a),
    (0x45d0d3b35021d695, 0x4603e44e45301b92),
    (0x45cd0623f4f4a28f, 0x460135f28f2d50b4),
    (0x45c904e0b3aa82a3, 0x45fdc479de0ef001),
    (0x45c58e7298af87d9, 0x45f9baed3ed27ab8),
    (0x45c2906cb94eb40d, 0x45f63ac6b4edc88e),
    (0x45bff58dab4f2a79, 0x45f332259185f1a0),
    (0x45bb7f1f31b571b6, 0x45f0916f04b6e18b),
    (0x45b7a550f03b145b, 0x45ec960bf23153e0),
    (0x45b453141082302a, 0x45e8a61745ec7d1d),
    (0x45b1761f87a6dc3d, 0x45e53e4f7d1666cb),
    (0x45adfd296adef82a, 0x45e24caf2c32af14),
    (0x45a9bd5efd2c0f15, 0x45df830c0bb41fd7),
    (0x45a61500f5293f06, 0x45db1e5acf351d87),
    (0x45a2ef5ff0323b28, 0x45d7538c60a04476),
    (0x45a03a918225a966, 0x45d40dfd87456f4c),
    (0x459bce26a2fb7176, 0x45d13bc07e891491),
    (0x4597cef42e9a617d, 0x45cd9a880f306bd8),
    (0x459460560e841d79, 0x45c96a0b33f2c4da),
    (0x45916e3ca3d4393f, 0x45c5ce9ab1670dd2),
    (0x458dcea670907819, 0x45c2b3e53538ff3f),
    (0x45897945aa1c9c35, 0x45c0084ff125639d),
    (0x4585c2827c986b62, 0x45bb7937d1c40c53),
    (0x458294150fb19119, 0x45b7872d9fa10aad),
    (0x457fb58fa290d436, 0x45b423ac0df49a40),
    (0x457b0c1a759f7739, 0x45b13af4f04f9998),
    (0x45770f4744735c2b, 0x45ad77f0c82e7641),
    (0x4573a68a8c1234e1, 0x45a92ff33023d5bd),
    (0x4570bcc5fd30f1dd, 0x45a5847eda620959),
    (0x456c7fa0c7e3bac7, 0x45a25f9ee0b923dc),
    (0x4568401b5336a8a0, 0x459f5cc7718082b0),
    (0x4564a029a7ea7cd1, 0x459ac0f5f3229372),
    (0x456188c45630dc53, 0x4596cfa9bcca59dc),
    (0x455dcc4fabf32f1c, 0x459370ab8327af5e),
    (0x45594ec06c0ff29f, 0x45908f24085d4597),
    (0x45557bc950253825, 0x458c324c20e337dc),
    (0x45523a8197d2607e, 0x4587fe903cdf5855),
    (0x454eeb27891d2bb3, 0x45846897d4b69fc6),
    (0x454a357936adf17b, 0x458159a386b11517),
    (0x454634b7f56b0a5c, 0x457d7c593130dd0b),
    (0x4542ce2a3690576b, 0x45790ae4d3405651),
    (0x453fd5f08ad2b29a, 0x4575422ef5d8949d),
    (0x453aef3ce0add578, 0x45720997f73e73dd),
    (0x4536c6e61e57bf9b, 0x456e9810295890ec),
    (0x4533407b59d72a5b, 0x4569eee068fa7596),
    (0x453043b9f1621ff3, 0x4565f8b87a31bd85),
    (0x452b77e5cbd5d147, 0x45629b2933ef4cbc),
    (0x45272f0c4c8e9bff, 0x455f7f338086a86b),
    (0x45238ee17b150182, 0x455aa577251ae485),
    (0x45207dd6833bb380, 0x45568823e52970be),
    (0x451bcc58edad5559, 0x45530b14dbe876bc),
    (0x45176aca47764427, 0x45501647ba798745),
    (0x4513b79118c097a1, 0x454b2a87e86d0c8a),
    (0x451097f82fc04025, 0x4546ed2f2515e933),
    (0x450beaa3d6c15504, 0x454356cd5ce7799e),
    (0x450778be2bd9795b, 0x45404e15ecc7f3f6),
    (0x4503b99832cbefdd, 0x453b7b040832f310),
    (0x45009182b326b229, 0x4537258610b3b233),
    (0x44fbd20fcc3b76d7, 0x45337c92babdc2fd),
    (0x44f7589207e91ad1, 0x453065b9616170d4),
    (0x44f394e7a2ac9fc7, 0x452b950d32467392),
    (0x44f06a996198f06f, 0x45272fd93e036cdc),
    (0x44eb8328ee330ae9, 0x45237b83c521fe96),
    (0x44e70aff489136eb, 0x45205ca50205d26a),
    (0x44e34a53ce0bbb6f, 0x451b7807e294781f),
    (0x44e0241de6c31e5b, 0x45170beaf9c7ffb6),
    (0x44daffb906d0ae09, 0x451353a6cf7f7fff),
    (0x44d691c7c768bece, 0x4510330f0fd69921),
    (0x44d2db8ca9009091, 0x450b24a16b4d09aa),
    (0x44cf7f4f88751db4, 0x4506ba91ac734786),
    (0x44ca4ab6470c1c5c, 0x450305e9721d0981),
    (0x44c5efa4d64f59f6, 0x44ffd3de10d62855),
    (0x44c24b0d7368076e, 0x44fa9cc93c25aca9),
    (0x44be7eea02e4ed88, 0x44f63daf8b4b1e0c),
    (0x44b96826d9e90341, 0x44f294175802d99a),
    (0x44b5282d2d5803fe, 0x44ef05e82aae2bb9),
    (0x44b19c050c56d0d7, 0x44e9e39dc5dd2f7c),
    (0x44ad4ca9b634ecba, 0x44e5982008db1304),
    (0x44a85cfacb7477f2, 0x44e200c898d9ee3e),
    (0x44a43fb317b5dc37, 0x44de00e9148a1d25),
    (0x44a0d23817479c67, 0x44d8fd4e01891bf8),
    (0x449bef1b1a12823e, 0x44d4cd9c04158cd7),
    (0x44972ede3b7eaa25, 0x44d14f4890ff2461),
    (0x44933b1c9d1576ec, 0x44cccaaea71ab0df),
    (0x448fe3bcf4629fea, 0x44c7eef13b59e96c),
    (0x448a6d7d18831888, 0x44c3e296303b2297),
    (0x4485e4062d5b6a4e, 0x44c083768c5e4542),
    (0x44821fb7a81c5444, 0x44bb69f10b0191b5),
    (0x447dfefbdb19ac7e, 0x44b6be573c40c8e7),
    (0x4478cf81557d20b6, 0x44b2dc119095729f),
    (0x447482fa78c40635, 0x44af4343c7d504b9),
    (0x4470f30c4d0be5c0, 0x44a9e614ecbf4af6),
    (0x446bff86d9ec8499, 0x44a571d34563050a),
    (0x44671d0b55b79b86, 0x44a1bf74244aed5a),
    (0x4463125f6a3d2570, 0x449d5cc6ba567f29),
    (0x445f755ea760487d, 0x449846e9dda7a163),
    (0x4459eebaa0589b4e, 0x449410047ead6894),
    (0x44555df1790f2f61, 0x44909257fca001c0),
    (0x445198c18435598d, 0x448b5ceb5a13221b),
    (0x444cf82e0eb6196b, 0x448694680a9a3ee6),
    (0x4447d5af6513e2be, 0x44829f9e7d8fd094),
    (0x444399c279e4699a, 0x447eb4b9e47b58c9),
    (0x44401c659160612d, 0x44794d1de5c4576f),
    (0x443a78e8252c204d, 0x4474d67050b31c2a),
    (0x4435bcf92cc55d86, 0x4471273463a1589b),
    (0x4431d791bb1324a1, 0x446c39fa0d4a5a2b),
    (0x442d463db5fa3c13, 0x44673679b24aeb9b),
    (0x4428011fb05fe090, 0x446314916abfa1ea),
    (0x4423ac71ce35c1d3, 0x445f5a1196b5bb2e),
    (0x44201dcc2acf7755, 0x4459beca74b0f147),
    (0x441a6459c5b11342, 0x4455218993857afc),
    (0x44159962aef547b3, 0x445155d47fdb9c94),
    (0x4411ab0e4d284f44, 0x444c6dc8a4bb3ba6),
    (0x440ce42dd8e4fa23, 0x44474ca889bbacd5),
    (0x44079c430435a7fc, 0x44431612a7ef535f),
    (0x440349127b59b217, 0x443f41259c9550c0),
    (0x43ff7d80dc993f2f, 0x443993e82b76e726),
    (0x43f9b270c24cc8fa, 0x4434ec0062aeeb78),
    (0x43f4f59f9910367e, 0x44311aeb0b11d1a1),
    (0x43f1164ab45aa235, 0x442bf4ab21b4f3f0),
    (0x43ebd8c96533b39b, 0x4426d561de54f6a1),
    (0x43e6ae172414ceba, 0x4422a406e25fcb44),
    (0x43e276873924f0b4, 0x441e6bba6770e22d),
    (0x43de0bad18c4e37d, 0x4418cf813910fdcd),
    (0x43d86f7884e1caad, 0x4414399f7770045f),
    (0x43d3dcfaee52a8f5, 0x44107aa30ce6a5a0),
    (0x43d023827dc88ed9, 0x440ad7301258d788),
    (0x43ca3666de0788b0, 0x4405d90f358d61f6),
    (0x43c546e385224d10, 0x4401c674ecd152d3),
    (0x43c1432649c86c4d, 0x43fce8cc007a6432),
    (0x43bbff3166bc36ee, 0x43f77f5624913c3a),
    (0x43b6b13ebb9a5ad4, 0x43f316da780bc4d9),
    (0x43b2624f3a0a8870, 0x43ef00460b24acf8),
    (0x43adc5de496b1810, 0x43e92920a7c80e26),
    (0x43a818d3a356669e, 0x43e4691b26b9c82f),
    (0x43a37e61fd4c0fe0, 0x43e08c969adf0bea),
    (0x439f8637ea4e52ac, 0x43dad2d0a9a18288),
    (0x43997a3dc62119c8, 0x43d5ba462dee8a02),
    (0x439494a3f6a9a70e, 0x43d1975e0627306c),
    (0x43909dee32687729, 0x43cc78892308bd90),
    (0x438ad1f9fba4b2ab, 0x43c7073c400e10dc),
    (0x4385a245d5e5289c, 0x43c29df4862ac231),
    (0x438171277cbbce9c, 0x43be163bd8df8640),
    (0x437c1c74b30d0bb0, 0x43b84cbb00f925f0),
    (0x4376a46f43f3118c, 0x43b39dbcd485dd07),
    (0x43723a85891dc72b, 0x43afa7b9159fc471),
    (0x436d561964307dc4, 0x43a98769faac8a1b),
    (0x4367984b636ad1be, 0x43a4940bc89fa5aa),
    (0x4362f7cc38bc628d, 0x43a0946088b6f8ed),
    (0x435e7b62ce66acde, 0x439ab3e8cfada51a),
    (0x43587b15da6677af, 0x43957e33e2b1c6da),
    (0x4353a6d00852a688, 0x43914a8b54629fb2),
    (0x434f88eba04114cb, 0x438bcede5acc0d40),
    (0x43494a28136fa731, 0x438659917bbb6632),
    (0x43444580945b8452, 0x4381f44979177348),
    (0x43403dbf8db89298, 0x437cd508600d0ba8),
    (0x433a03065db54a4b, 0x437723974e9529d8),
    (0x4334d1f2eb853100, 0x43728f9c9b769ee3),
    (0x4330a814a1dfc5ed, 0x436dc34b6999ff72),
    (0x432aa36c9242f8bc, 0x4367d9db080918ba),
    (0x43254a6b679dd96f, 0x43631aa564e92066),
    (0x4321022313b11381, 0x435e96c265c21fbf),
    (0x431b2959e487c93f, 0x43587a2188252d5f),
    (0x4315ad66c67f3f63, 0x435393ad199301de),
    (0x43114ac7e9322a1a, 0x434f4ccd98eab06b),
    (0x430b931b883c77f2, 0x4349026a7e3c9538),
    (0x4305f9a24050e89f, 0x4343f92e9472ca4c),
    (0x43018115431b6c4a, 0x433fe32077e095c4),
    (0x42fbdf55dd9bdce0, 0x433970fb0b5580dc),
    (0x42f62e225ebca190, 0x433449de67f2c6b2),
    (0x42f1a4576cd5cddc, 0x43302be7023a443e),
    (0x42ec0d0bdeb46ae2, 0x4329c4671c1a6e3c),
    (0x42e64a386137b955, 0x432484b1e63b3be4),
    (0x42e1b418ba2217c6, 0x432054a9a7c2f05a),
    (0x42dc1ba4950b8f4f, 0x4319fb9933adac68),
    (0x42d64d860502b279, 0x4314a8e4dbe3539c),
    (0x42d1b02414a73357, 0x43106b4fe82cc6ae),
    (0x42cc0aee6d6b1406, 0x430a15d86bb23572),
    (0x42c637ff9397e989, 0x4304b5fdd0f567fa),
    (0x42c1988625955723, 0x43006f8da87263ce),
    (0x42bbdb204ff1cda3, 0x42fa12cc7b1bf616),
    (0x42b609ec277b8703, 0x42f4abd0af44c7f8),
    (0x42b16d8d1241b86b, 0x42f06154a07d21a2),
    (0x42ab8cd873c4de72, 0x42e9f27fa465d061),
    (0x42a5c3e42539c769, 0x42e48a7fb96552ca),
    (0x42a12fc6cdafd10d, 0x42e040d4ab2de626),
    (0x429b2118f75a4eb7, 0x42d9b55e7c11d9e6),
    (0x429566cdf4525eb0, 0x42d4527acab6dfeb),
    (0x4290dffe0bfc0c74, 0x42d00e7aba6527c9),
    (0x428a9942579915cd, 0x42c95c35893651c9),
    (0x4284f3d9114d799b, 0x42c4047ce663f641),
    (0x42807f35ef1a4fc0, 0x42bf95dcee779f74),
    (0x4279f70bf04a77ce, 0x42b8e82cd2a6133c),
    (0x42746c779ebb14ae, 0x42b3a1882865d26e),
    (0x42700ea48df1e7fb, 0x42aeee1d41e1e516),
    (0x42693c7abef59a2c, 0x42a85ac17b553c4f),
    (0x4263d256a5ee461d, 0x42a32ae03812fc00),
    (0x425f1f58fe66e142, 0x429e27d88d5289bf),
    (0x42586bd6adace04e, 0x4297b5bd9f52a89e),
    (0x42532755417b50dd, 0x4292a20366f6a0de),
    (0x424e07ab300dc4b9, 0x428d458a013d18b4),
    (0x4247879eb52380ed, 0x4286fb2eaf7d8102),
    (0x42426d7af2869fc5, 0x428208a2b041836e),
    (0x423cd98a274acae3, 0x427c49f8a8ec4aeb),
    (0x4236927c2c3e4970, 0x42762d5a948b6358),
    (0x4231a6ed66936eea, 0x42716098d4b94692),
    (0x422b986ab7ebdd54, 0x426b3828ebcc128b),
    (0x42258f359f0c4e8f, 0x42654eb3e9a3e72b),
    (0x4220d5e5f59de7c1, 0x4260abe0d45fd5c2),
    (0x421a47db588b15cf, 0x425a134d30d655e4),
    (0x421480a1879e8f57, 0x425461cda38e2783),
    (0x420ff94e3fca1752, 0x424fd91813f8cc8c),
    (0x4208eb738c76b2f2, 0x4248deb61106f334),
    (0x4203699940a6a811, 0x4243694e7b13691b),
    (0x41fe3ae49fef5535, 0x423e49705a5ebd5f),
    (0x41f786c3dca158c4, 0x42379dc285401b7d),
    (0x41f24cec8453db03, 0x423267e46fd85893),
    (0x41ec74fc41217dfb, 0x422cad0afbb569b1),
    (0x41e61d46c11dd916, 0x422653d077d9eef0),
    (0x41e12d55c1e73c65, 0x42216038b4af0a0e),
    (0x41daabdabdb93484, 0x421b081aaf25ade1),
    (0x41d4b252d0bc8beb, 0x4215042e1a8664ed),
    (0x41d00d6f8a57f06e, 0x421054e44f8ee735),
    (0x41c8e38df2790b7a, 0x42095eb2cb828067),
    (0x41c3490e7e2bc31c, 0x4203b20c56ad84f5),
    (0x41bddf56913a541e, 0x41fe90cb5cac7057),
    (0x41b71fde01e2ca8c, 0x41f7b4b752e86e5f),
    (0x41b1e4659a2a2156, 0x41f26072a17961a0),
    (0x41abac92daac0b9d, 0x41ec7a2ecd5f05a0),
    (0x41a56441b55bfff1, 0x41e60dcef1cedc3a),
    (0x41a08700c199ad4f, 0x41e112346e13dd7e),
    (0x419986a650394095, 0x41da6a5096da5b7d),
    (0x4193b3d55ebd8547, 0x41d46d572e10e216),
    (0x418e667d9a8bcd9e, 0x41cf93d0d186fbcd),
    (0x4187712b76c8c7f6, 0x41c86529e9df069c),
    (0x4182115447c6627d, 0x41c2d65aee08874c),
    (0x417bd660913b938c, 0x41bd13c32a98512b),
    (0x41756f3ed5aa4222, 0x41b66e459a7794f4),
    (0x41707f14a8d0c116, 0x41b14b8b6b67144e),
    (0x41696129ca292f7e, 0x41aaa854b5c4f131),
    (0x4163837bf030f4a8, 0x41a488b9479ee1c4),
    (0x415dfe0c1b8af1f3, 0x419f9e77238e0031),
    (0x415709b5a3a79128, 0x41985502f16a0f8d),
    (0x4151affd2eccd616, 0x4192b72182c97af5),
    (0x414b2564005de7e5, 0x418cc6bb6d71090d),
    (0x4144d23fa69bd814, 0x41861cb1a027e057),
    (0x413fecbcf04dca90, 0x4180fba0d2660d89),
    (0x4138767d7fc43eb6, 0x417a130711aadcda),
    (0x4132bc67d8c20136, 0x417401abca024479),
    (0x412caf8458ad2a12, 0x416eafc2b00a99b1),
    (0x4125f2e79283b1ca, 0x416785c00b5cb27e),
    (0x4120c93ac678b0cc, 0x416205a7d78be568),
    (0x4119a9b05368c88b, 0x415b9a31a7b9868c),
    (0x41139b7fc18e5891, 0x4155209676e4b424),
    (0x410df2779ceabfc8, 0x415029ce648133fd),
    (0x4106dbccf848794a, 0x4148b81d680cdfc5),
    (0x41017080ae674896, 0x4142e48f266999cf),
    (0x40fa98e26924c6c8, 0x413cdd86b83e679d),
    (0x40f445a6a9a273c6, 0x41360a47aca18e96),
    (0x40eee324e1fde417, 0x4130d210b765b3d6),
    (0x40e784e3008fb46b, 0x4129a961d6383ef7),
    (0x40e1e65fd1ef2701, 0x412390b73f2a4fb0),
    (0x40db3bb863d26278, 0x411dd1e5296953a3),
    (0x40d4b4e35dbe0cdd, 0x4116b6a7a27c9005),
    (0x40cf790f6877f51e, 0x41114acc164c64fe),
    (0x40c7e82cde922833, 0x410a511aa3827999),
    (0x40c226a790f97768, 0x410404113d7d18e6),
    (0x40bb8c6342337220, 0x40fe6ea95e92c624),
    (0x40b4e53acc7531b1, 0x40f71f97a2983044),
    (0x40afaed5c4559717, 0x40f18fb2ded8ebb1),
    (0x40a80217e57d8a3f, 0x40eaa947efe69879),
    (0x40a22f0652094ae6, 0x40e43a79684f6ef6),
    (0x409b87f86a26fad7, 0x40deae2ef93df996),
    (0x4094d4ec8ea8ee67, 0x40d7414e5b5ca43c),
    (0x408f8283ec45f117, 0x40d19e4732be2ff0),
    (0x4087d1b22b6810f6, 0x40caaeb7de6855e2),
    (0x4081ff2d0d5a2649, 0x40c431f651be2ff4),
    (0x407b2e9e76c8d9f9, 0x40be8e2722ca46cf),
    (0x4074848ddf7dfffe, 0x40b71a91ee04e82c),
    (0x406ef5b15f73200a, 0x40b176014201ab17),
    (0x406758b92cdfdc64, 0x40aa6137c537bf6d),
    (0x406198d422be3f8c, 0x40a3ead7491061af),
    (0x405a838b09afcf62, 0x409e0fbc2ec572b9),
    (0x4053f700c0d99876, 0x4096accae115453e),
    (0x404e0d68d9047f7a, 0x409118577f06b2f2),
    (0x40469b7f34ec048e, 0x4089c3973d4c9b08),
    (0x4040ffa110b113f0, 0x408367af901b1370),
    (0x40398cd1cb38dcc0, 0x407d377f96b9fd62),
    (0x403331480815e7cd, 0x4075fbee5e7590f4),
    (0x402cd1db96a6c6ef, 0x407088a80b837328),
    (0x4025a0a9c047e3c7, 0x4068db7ccf7600f4),
    (0x402038ef3cbdc1c7, 0x4062ad2ebb6268bd),
    (0x40185308ad209551, 0x405c0d23d3daadad),
    (0x40123a3bf963c1eb, 0x40550e4191e1b76c),
    (0x400b4de68e608347, 0x404f980a88588961),
    (0x400470ce4924af72, 0x4047b10fe1f0aeaa),
    (0x3ffe9700b697ec96, 0x4041c1d98f1b1f71),
    (0x3ff6e0c8fadbb050, 0x403a9b07f491a273),
    (0x3ff11a259faba91e, 0x4033ebfb36da371b),
    (0x3fe98e739a118b5e, 0x402dd1d36683753b),
    (0x3fe315f58c13df9c, 0x40264e7f0a95542f),
    (0x3fdc7e35cf4db634, 0x4020ada93ac2688e),
    (0x3fd542176fe1c2b2, 0x4018ed9e84be9bac),
    (0x3fcfb491e02b7c15, 0x40129ecb15514182),
    (0x3fc7a1c33cc1922b, 0x400bcdb33f7b88f9),
    (0x3fc19b0f23241b88, 0x4004bf6ca87a4707),
    (0x3fba383ca9f98a0f, 0x3ffef3318a5788de),
    (0x3fb383bf2b37a037, 0x3ff712bc1550fb6a),
    (0x3fad08cdac87dce6, 0x3ff131510c1da6ad),
    (0x3fa596acfa0bcc8f, 0x3fe99bf36c7ef068),
    (0x3fa00b60212cf113, 0x3fe3104d5f799552),
    (0x3f97d62a282a4851, 0x3fdc5e5338097f6b),
    (0x3f91b2abc895a771, 0x3fd518db221cf8ba),
    (0x3f8a4480db60fe17, 0x3fcf5d1c58fdc6ac),
    (0x3f837be42e1159e7, 0x3fc74d459ba38afe),
    (0x3f7ce3ee3757dbe5, 0x3fc14dc49cbc0c30),
    (0x3f7568986affafc5, 0x3fb9afd0eca1593d),
    (0x3f6fb69c5d6b524e, 0x3fb30e632b0008c9),
    (0x3f677a47ec4e9fa1, 0x3fac42b48d5cfe42),
    (0x3f615f4e018a09ee, 0x3fa4f1f511f7b2d7),
    (0x3f59b25dc6d6642e, 0x3f9f08155c194aad),
    (0x3f52feeed430b87b, 0x3f96f9f62ec4193a),
    (0x3f4c122bcbda7f8e, 0x3f9100ffa10ff0f3),
    (0x3f44bb153d2d0728, 0x3f8927ce5fbbe352),
    (0x3f3e9ae566e02486, 0x3f82992f3c7d2ce7),
    (0x3f36948e77b6c537, 0x3f7b7ccca35ce88e),
    (0x3f30a6cd27d913d7, 0x3f744d7c3dca9cc8),
    (0x3f288c0c973b68fc, 0x3f6dfa22008cf2c8),
    (0x3f2215988e86b086, 0x3f661eb258af5a93),
    (0x3f1aa222a98ba953, 0x3f60506e21782262),
    (0x3f139a30e3030664, 0x3f580d8271e40929),
    (0x3f0cd740d2318d4d, 0x3f51b8f04bdfa1bf),
    (0x3f0534d810db5377, 0x3f4a1a7ec86c94fb),
    (0x3eff2bb06a7069e2, 0x3f4336f30c8d3345),
    (0x3ef6e5b33b150249, 0x3f3c461717dacbd8),
    (0x3ef0cfc8192e69bd, 0x3f34cab82baddd6c),
    (0x3ee8acc81455f971, 0x3f2e9094beff3587),
    (0x3ee219685023e1be, 0x3f267464f8a36aff),
    (0x3eda89fa515a2b44, 0x3f207d0b7bb52fc7),
    (0x3ed372982e2fde1d, 0x3f1833ffa698fa8b),
    (0x3ecc7d093fb7e463, 0x3f11c147957723bd),
    (0x3ec4db1c7b733812, 0x3f0a096cc3260668),
    (0x3ebe858d8b3acc80, 0x3f0314deba7bab37),
    (0x3eb6529df3d1cf1c, 0x3efbf46cd0f972c3),
    (0x3eb0517b9e1f89de, 0x3ef47796af08285b),
    (0x3ea7d8a7f2a8a2d0, 0x3eedf49a10ccc568),
    (0x3ea16a45fcb7b882, 0x3ee5e9197017791d),
    (0x3e996ca751cac37f, 0x3ee004b34180a4a9),
    (0x3e928cb2cb8b4015, 0x3ed768f3e13d3bdc),
    (0x3e8b0de982dbf111, 0x3ed1190d162109ab),
    (0x3e83b8387eea3f9d, 0x3ec8f694ad8ac632),
    (0x3e7cbb9be9cbac1e, 0x3ec236e8d3a9e0e7),
    (0x3e74ec36b8fdf428, 0x3eba914b62872bc3),
    (0x3e6e74cb7ebdea0a, 0x3eb35dbe86ed95c7),
    (0x3e6627f6220ca6a9, 0x3eac3847cbf78a3b),
    (0x3e601c325e8bb3c0, 0x3ea48cefa0aac509),
    (0x3e576aa8791eba33, 0x3e9dea9996bf1c0f),
    (0x3e510299f255a2ca, 0x3e95c3c6ce5f2f75),
    (0x3e48b368e0429dac, 0x3e8fa73040873530),
    (0x3e41ecf2c897b782, 0x3e8701780b38d71a),
    (0x3e3a013c6709bdd5, 0x3e80b66dac93672b),
    (0x3e32da83d59392f5, 0x3e784520ec5eb55a),
    (0x3e2b5312d520a3f4, 0x3e719d258cf47194),
    (0x3e23ca855a30dad5, 0x3e698dc92b26aea0),
    (0x3e1ca7c7b61a5357, 0x3e628708aaed4d70),
    (0x3e14bc21b880f9de, 0x3e5ada636f165959),
    (0x3e0dfe23a6ad4f8b, 0x3e537351629c53c0),
    (0x3e05ae767663002e, 0x3e4c29ce58c1fc10),
    (0x3dff54dde2ba8f56, 0x3e44612c5674eed9),
    (0x3df6a0956d7d1b63, 0x3e3d7ad5cdc3741e),
    (0x3df0554f0943ba8c, 0x3e354fb970dbe54e),
    (0x3de791862715d02f, 0x3e2ecc34851c9763),
    (0x3de0feff2a4fc490, 0x3e263e0d12d4d288),
    (0x3dd8804761a993c4, 0x3e200e4ae934cb56),
    (0x3dd1a6c6c06ea18b, 0x3e172b316e47cc93),
    (0x3dc96bd0bd6c9a31, 0x3e10b54bd6a9e23f),
    (0x3dc24be8d0138113, 0x3e08162809b8dff6),
    (0x3dba53148c3fc482, 0x3e015a6678e0082c),
    (0x3db2eda549c16ee8, 0x3df8fdeb6a9e8ebc),
    (0x3dab3501c0fdbbcf, 0x3df1fcdfea216d16),
    (0x3da38b3a7222dd33, 0x3de9e170e2dbff8c),
    (0x3d9c1085f96d9fee, 0x3de29bfa42bc7b76),
    (0x3d9423e65b2a3a8c, 0x3ddabfaa7d4233fa),
    (0x3d8ce48f9d9e5928, 0x3dd336f5ff042b88),
    (0x3d84b6e86a5aa9d8, 0x3dcb978904649f57),
    (0x3d7db0100ef385d3, 0x3dc3cd13761f1731),
    (0x3d754382e8081943, 0x3dbc67fe1e83e910),
    (0x3d6e71fde0c5e218, 0x3db45d945dc4844d),
    (0x3d65c8fc931c6d94, 0x3dad2ffe78d87996),
    (0x3d5f295714275bc3, 0x3da4e7bd56b77338),
    (0x3d5646a234bddd88, 0x3d9dee83fc205fc8),
    (0x3d4fd5235020e009, 0x3d956ad77d8efe38),
    (0x3d46bbc82f12468a, 0x3d8ea290040397f4),
    (0x3d403a3b07cf84b0, 0x3d85e631fb2a96db),
    (0x3d3727cc024d462a, 0x3d7f4b2d92a8da6a),
    (0x3d3083385f1e344c, 0x3d76592390114765),
    (0x3d278a15c33bf0d1, 0x3d6fe77379b5869a),
    (0x3d20c5225e967ce3, 0x3d66c30c15ee186b),
    (0x3d17e2197e99732e, 0x3d603b4338f71d3b),
    (0x3d10ff9aa4df55cb, 0x3d572355f261c90f),
    (0x3d082f5884a3c4ff, 0x3d507bcd8d61f54d),
    (0x3d01324c9f973607, 0x3d477977767b819c),
    (0x3cf8716298a66d68, 0x3d40b4fbeda58aa9),
    (0x3cf15cee56fb8f80, 0x3d37c4f426570458),
    (0x3ce8a7d700826ce3, 0x3d30e67b4f33d066),
    (0x3ce17f41219f6e6e, 0x3d28055de49eb405),
    (0x3cd8d265709c8b81, 0x3d211003322f9f2a),
    (0x3cd199123dce7f7c, 0x3d183a55fe01c77f),
    (0x3cc8f0ced10d0db4, 0x3d11315652423380),
    (0x3cc1aa3b4e8f3caa, 0x3d08638e1112031d),
    (0x3cb902e5d96b5dc7, 0x3d014a433d21a4e2),
    (0x3cb1b2a2ba958505, 0x3cf880c8cf6ecf16),
    (0x3ca9088f811b7254, 0x3cf15aa4ccc2f79b),
    (0x3ca1b23bebdcda6d, 0x3ce891da95a3a6f5),
    (0x3c9901c342974910, 0x3ce1626283914e64),
    (0x3c91a9076f0d2e24, 0x3cd896a9d7ab89b1),
    (0x3c88ee8b30ca2586, 0x3cd16170c969f828),
    (0x3c819712f23cae3d, 0x3cc88f2f609fe4d3),
    (0x3c78cf03de32b406, 0x3cc157d10888e2f3),
    (0x3c717c7923127a39, 0x3cb87b7664b4e00c),
    (0x3c68a35c1621f2cc, 0x3cb14591aa0080ca),
    (0x3c6159616cbf8a0c, 0x3ca85b9c65443c51),
    (0x3c586bd4690c0845, 0x3ca12acdf1c9738c),
    (0x3c512dff96b26d81, 0x3c982fd0e7486194),
    (0x3c4828be8d7b2e74, 0x3c9107adbae7661d),
    (0x3c40fa934555eb5a, 0x3c87f854fd47e7d3),
    (0x3c37da7c97c8ea4b, 0x3c80dc65148f57fc),
    (0x3c30bf675e9015a3, 0x3c77b57aa64c1e42),
    (0x3c2781800b4c5862, 0x3c70a933c1a65e31),
    (0x3c207cd15415698a, 0x3c6767a404101f5a),
    (0x3c171e48c82b190a, 0x3c606e649c54a11d),
    (0x3c10333055f872d1, 0x3c570f426b1f5c67),
    (0x3c06b163d96b3dd9, 0x3c502c4cdfc5722c),
    (0x3bffc5d8e0519af3, 0x3c46acd55017e4e2),
    (0x3bf63b6a2745bde1, 0x3c3fc696b5025168),
    (0x3bef18eb2ba6357f, 0x3c3640e915b3f3ea),
    (0x3be5bcff1208eb99, 0x3c2f278f182d5cce),
    (0x3bde60853b8b4b65, 0x3c25cc15bf9dbbbb),
    (0x3bd536cefa1810b4, 0x3c1e7c6162103b4e),
    (0x3bcd9da06644bc9d, 0x3c154efd8e5e8a15),
    (0x3bc4a98db9bff0e8, 0x3c0dc5f9803d5324),
    (0x3bbcd13f7b7c3414, 0x3c04ca4b88f6234c),
    (0x3bb415f515af2672, 0x3bfd054eb8db2ad5),
    (0x3babfc6c8b2d1c95, 0x3bf43eb1f8cfdcf1),
    (0x3ba37cc328e513e5, 0x3bec3b617ec3cfd6),
    (0x3b9b2036a988bead, 0x3be3ace8dce03fbd),
    (0x3b92deb8d0dae905, 0x3bdb69393c895b87),
    (0x3b8a3dafb67a96cf, 0x3bd315ac58b7d6b7),
    (0x3b823c981e88b022, 0x3bca8fe21d205eb0),
    (0x3b7955ea2f392221, 0x3bc279bb2446baf4),
    (0x3b719722d0b598a4, 0x3bb9b06ad8cbcafb),
    (0x3b6869f70ffc1fcb, 0x3bb1d9d500e92622),
    (0x3b60ef18dbc017ff, 0x3ba8cbe28ca7c426),
    (0x3b577ae3cb88b469, 0x3ba136b93820fc76),
    (0x3b50453702b9a5bb, 0x3b97e356a2db5e15),
    (0x3b4689b85dc875b1, 0x3b909125281c373a),
    (0x3b3f346b0aa94647, 0x3b86f7d0d10edd84),
    (0x3b3597757e14e4e8, 0x3b7fd3a5c3ac18bb),
    (0x3b2ddd8dcb76e388, 0x3b760a5532471804),
    (0x3b24a512f5483d32, 0x3b6e82efb884fa70),
    (0x3b1c872d91eff745, 0x3b651be080b9d49d),
    (0x3b13b37e1b01d1bd, 0x3b5d31877f1753ba),
    (0x3b0b3291e83a6dda, 0x3b542d6673958cf7),
    (0x3b02c3987ce2b431, 0x3b4be0be95f0126e),
    (0x3af9e0f0cfd57ab4, 0x3b433fd04413c4e8),
    (0x3af1d636b1da2b46, 0x3b3a91d6af35687b),
    (0x3ae8936d384f421a, 0x3b3253fb5c838ba6),
    (0x3ae0ec1f5aebc21f, 0x3b2945fff2eb1b17),
    (0x3ad74b15b6eeceb1, 0x3b216ab8334ccb0a),
    (0x3ad0060a522d6818, 0x3b17fe578074e0c8),
    (0x3ac608e37fe916b7, 0x3b1084c9533fea9d),
    (0x3abe4940102c0a26, 0x3b06bbe630bdc58c),
    (0x3ab4cdb9a0d20ef7, 0x3aff45c523b5ec4e),
    (0x3aac90f21d2d475f, 0x3af57f9f997e1f52),
    (0x3aa39a647b21bed6, 0x3aed8b50e711660a),
    (0x3a9ae43ba1c85bb1, 0x3ae44a615135e868),
    (0x3a926f997cdc041d, 0x3adbdb5f7a82d0f4),
    (0x3a89440cec9f5e3a, 0x3ad31cf2729ac24d),
    (0x3a814df714b2cc27, 0x3aca36fa64c5b19f),
    (0x3a77b135dc219792, 0x3ac1f8035d726d41),
    (0x3a703604de581436, 0x3ab89f0afa1deeca),
    (0x3a662c6642f5d4b9, 0x3ab0dc2db21eaf21),
    (0x3a5e5068065139be, 0x3aa7145a7dd1cf8c),
    (0x3a54b62e9374c452, 0x3a9f93e90900fd6b),
    (0x3a4c49bf95c5f745, 0x3a9597928f3e0c70),
    (0x3a434f00cbd8ea42, 0x3a8d8389849eaf01),
    (0x3a3a589caf82618c, 0x3a84293ddcb013c1),
    (0x3a31f7319c565581, 0x3a7b87eb911fc5ef),
    (0x3a287d63120a742c, 0x3a72c9c915a28dda),
    (0x3a20aef9bffa708d, 0x3a69a19446f657cc),
    (0x3a16b84ffdb5d885, 0x3a6179841589cd00),
    (0x3a0eecef0206652c, 0x3a57d0e0e7cac5b0),
    (0x3a05097c74b3d08e, 0x3a5038a34010e13f),
    (0x39fc9b60c296975d, 0x3a461608ea10db83),
    (0x39f370dfa8e149d1, 0x3a3e0e820ef74630),
    (0x39ea6925bee98d74, 0x3a3471203b047e85),
    (0x39e1ee518d278c58, 0x3a2bcabf2ba981bf),
    (0x39d855f0a34582a6, 0x3a22e219acb023ae),
    (0x39d0818d80634105, 0x3a19a5d5233d8e13),
    (0x39c6614d9da549fb, 0x3a1168c985c93c95),
    (0x39be546a107b57d5, 0x3a079f71edd3cb51),
    (0x39b48aa64075b150, 0x3a0004e8297ce819),
    (0x39abcfa525d16889, 0x39f5b71dfbe662f9),
    (0x39a2d14568fa3103, 0x39ed6c299b6b03de),
    (0x399973b86e9a718f, 0x39e3ec401194be5f),
    (0x3991345b1de4a541, 0x39daf7b06dd7c2fa),
    (0x39873f6cd7db5a56, 0x39d23e2123cac1dc),
    (0x397f6600b76754fc, 0x39c8ab4ee2717624),
    (0x3975316d5b010b17, 0x39c0abf02c055867),
    (0x396c98758b0a4eba, 0x39b685ccfe1e2ab5),
    (0x3963484c1e2418cb, 0x39ae698bd1000fd2),
    (0x3959fe006460b912, 0x39a485d5ed97243e),
    (0x395182875c9f3984, 0x399baf50ff65044d),
    (0x394794741d4d28c6, 0x3992a9fd1221e357),
    (0x393fbd1c1dcb3991, 0x3989271dfe5687e7),
    (0x393559911f8b7812, 0x3980f0c2d578f06a),
    (0x392cb5889458c00e, 0x3976cec95dfef21a),
    (0x39234b0b5ddf82c6, 0x396eb1327842cc63),
    (0x3919eb0ea42d451e, 0x3964a4186866270a),
    (0x3911668fdbb007d5, 0x395bbfd05e1b64f3),
    (0x39075a62b0407aef, 0x3952a4c4fb42b862),
    (0x38ff53937c26236e, 0x39490a22ee0d506e),
    (0x38f50039cbf56e41, 0x3940ce82f0139653),
    (0x38ec24cdc6a6909b, 0x39368ce8cbb7eaeb),
    (0x38e2d94fe2dcd5a4, 0x392e3e0a1bcb7b90),
    (0x38d93c37ffa2be30, 0x392444e2559eb861),
    (0x38d0e26d33274acd, 0x391b28030446d467),
    (0x38c6955081ac80b2, 0x39122ed7a20d2031),
    (0x38be30d639687648, 0x3908566bbf3afdcc),
    (0x38b42bb0eedd3fb2, 0x3900479dd0162987),
    (0x38aaf070915be74e, 0x38f5c4d5495043b3),
    (0x38a1fb139d7ad130, 0x38ed18375dee0b86),
    (0x3897fdb85ec65bd4, 0x38e36eec953c25e3),
    (0x388ffeb0495cc103, 0x38d9f29b80329143),
    (0x388552f40714fe54, 0x38d1507fc4d2f4ba),
    (0x387c690e28b6a9bf, 0x38c7189333483e3b),
    (0x3872eaa616a9b21c, 0x38becb050b3055a0),
    (0x38692da9c960076a, 0x38b4848161f4e509),
    (0x3860bf90e157d9da, 0x38ab542338309321),
    (0x3856454856772fed, 0x38a231052b5f7dd6),
    (0x384d99724acabf71, 0x389834eb55a1d18e),
    (0x3843a90e48619574, 0x389018fd4cd15479),
    (0x383a1acf8c750894, 0x3885664a8518a142),
    (0x383152813e135602, 0x387c6f152728fb8f),
    (0x3826fa5568fa20f3, 0x3872e18c95c4bfb1),
    (0x381e77117811a7d2, 0x38691022d83bf8f5),
    (0x38142faa33070d2a, 0x3860a05da41d6048),
    (0x380abcdbdfcc9f7c, 0x38560c75486158b0),
    (0x3801b2fdb7cab6df, 0x384d39954e0a9d3d),
    (0x37f76bb52e82b59a, 0x38435be6eb898758),
    (0x37eefa0e49e3fecc, 0x3839a2821242ebd0),
    (0x37e479ae4e865fee, 0x3830f6d9e092345c),
    (0x37db0e03e96a5485, 0x3826711ad9310ce1),
    (0x37d1dd90a3522c75, 0x381dac6b554960ff),
    (0x37c795540ea5dda7, 0x38139bb36d1a51da),
    (0x37bf1db008e061d6, 0x3809e6c7f42ee3a0),
    (0x37b4846e1e475567, 0x38011954fcd9d596),
    (0x37ab0b57b848dfd5, 0x37f69099571fea27),
    (0x37a1d0aee3f21eae, 0x37edc36feecfa2ba),
    (0x379775af322a6fb6, 0x37e39ea243c7bf71),
    (0x378ee0aaff5c7275, 0x37d9da7a2c5ab52c),
    (0x37844f853ca3d2a1, 0x37d1068e39733d5f),
    (0x377ab4ef712ea53c, 0x37c669cb88b98bb4),
    (0x37718ccfb2383c0d, 0x37bd7dccacf16bdf),
    (0x37670debd3477d7c, 0x37b364981b4fcacc),
    (0x375e45347f37826d, 0x37a97e0b5db827a8),
    (0x3753dcdd6f53a761, 0x37a0bf347561e06f),
    (0x374a0de9e4d0326a, 0x3795fe1a8f2ffd47),
    (0x3741146574533e59, 0x378cde08f63664fd),
    (0x373661c59f17fae0, 0x3782efafc89163c3),
    (0x372d50e0eba3e44d, 0x3778d4d432dee077),
    (0x37233091416396db, 0x377045db9ec2ba81),
    (0x37191c3cacc75aaa, 0x376551681b8d3610),
    (0x37106bb841410434, 0x375be9e2feb561e0),
    (0x37057755a2313bdf, 0x37524419d9ce37ff),
    (0x36fc0c4e9f387792, 0x3747e4dfe2cee6a2),
    (0x36f250ad98a67e4f, 0x373f3daa3dd37f3a),
    (0x36e7e859d0226582, 0x373469d2facc66f7),
    (0x36df314a5f5af6d7, 0x372aa9f80ec12e52),
    (0x36d456b681315daf, 0x372167dcc97a0fd3),
    (0x36ca82a4c036e3f3, 0x3716b69077bfc3c7),
    (0x36c144d77262f022, 0x370d9fdd2296338f),
    (0x36b67cb265d8483a, 0x37034f5aee912170),
    (0x36ad448f86c23d12, 0x36f92943634830d2),
    (0x36a3098d833c2da0, 0x36f0627b1e47c261),
    (0x3698c0f08dff4e68, 0x36e554226cd542ef),
    (0x369015dd1c62a082, 0x36dbc0384ab3550d),
    (0x3684e52056f2dec4, 0x36d20b6b60dae611),
    (0x367b2128dd015485, 0x36c7747e31ddd25c),
    (0x36719a81ef58dfc6, 0x36be790d89e8e564),
    (0x3666d56e11abc8a7, 0x36b3c919aea97870),
    (0x365d9a774b67b183, 0x36a9ae2b16a9550a),
    (0x36532e43016e50e4, 0x36a0a8564eab8ff5),
    (0x3648d7d80e14b910, 0x3695996d7e13f467),
    (0x364014ad3fec9ec4, 0x368bfe545fce7a55),
    (0x3634ceca2b274540, 0x368221a377d62eb4),
    (0x362ae9438e9a5c0b, 0x367779da2df7a30c),
    (0x362164daef1c2b15, 0x366e61933d473856),
    (0x36167960688424ef, 0x3663a62b4892ce6e),
    (0x360d061d530972c5, 0x3659676058974913),
    (0x3602bb6ba79809ed, 0x365069f8cb02119f),
    (0x35f82af24bbe81dd, 0x36453351984f5d61),
    (0x35ef2a603a977e7c, 0x363b5e91e3ee196d),
    (0x35e415c074fc9065, 0x3631a8782bc000be),
    (0x35d9e016e74801cb, 0x3626c625c9dd5c05),
    (0x35d0a8cf82738469, 0x361d5b98efc2e8d5),
    (0x35c570fb47030aa8, 0x3612e9c8b4dec3de),
    (0x35bb951931589ad6, 0x36085b69d604d483),
    (0x35b1bb88966006c4, 0x35ff5a41ad29abd6),
    (0x35a6ca07adb2cabe, 0x35f42b32a68b6433),
    (0x359d4603cf73627e, 0x35e9ef9ba1f58105),
    (0x3592cad15ed5f00d, 0x35e0ab038a2ddd17),
    (0x35881da56c03901c, 0x35d569ce24f30cad),
    (0x357eeeaf2386ba73, 0x35cb7f008c184953),
    (0x3573d40375ab2fc9, 0x35c1a5112ad78884),
    (0x35696874b77050b3, 0x35b6a28d7dab4750),
    (0x35604568afbad70b, 0x35ad05b30647f5b6),
    (0x3554d4668bc3c638, 0x35a298ce64edbc52),
    (0x354aa703eac27071, 0x3597d248efdebaf1),
    (0x35410b0827e1c59f, 0x358e7fb2011e1175),
    (0x3535c93bed6568e9, 0x358383b206d0bb99),
    (0x352bd5de633517f7, 0x3578f5cbbd7e3bd9),
    (0x3521c60a3dd2224e, 0x356fe8f1d993bb19),
    (0x3516afcac6c09d1a, 0x3564632fef2669ec),
    (0x350cf19c31a391ac, 0x355a09e23dee12db),
    (0x3502744e94597df0, 0x35509eb734c1a314),
    (0x34f7856cde19858b, 0x354534c49c3a48a0),
    (0x34edf6f23e67822e, 0x353b0b689ea896f0),
    (0x34e313ca61e59763, 0x35313c9ee6b2a529),
    (0x34d8479b71b66ff2, 0x3525f60114dc317a),
    (0x34cee2c2766d39ae, 0x351bf759f4ae6481),
    (0x34c3a29293d26666, 0x3511cc51b3533d1b),
    (0x34b8f3fbe30bc1d8, 0x3506a496dcf46820),
    (0x34afb22b934b9930, 0x34fccadf3adb1af0),
    (0x34a41ee59ab3f625, 0x34f24c114d622260),
    (0x3499886bd6d1085b, 0x34e73e63a45afd4d),
    (0x3490314c07978175, 0x34dd835dd5ba6335),
    (0x3484873499e69a71, 0x34d2ba486638ab1e),
    (0x347a030c72f0cf33, 0x34c7c17c5d99552c),
    (0x347078e5ec28bafd, 0x34be1e853589fe15),
    (0x3464da2bb75a5c65, 0x34b3159306d0abd0),
    (0x345a624c67aa97df, 0x34a82c376c3acddf),
    (0x3450aef82f484486, 0x349e9a5b32d2ef52),
    (0x344516b94dabb86d, 0x34935cc607ce4fd8),
    (0x343aa4f078af0321, 0x34887d359f39448e),
    (0x3430d2cf5025ba2d, 0x347ef546c9652b0a),
    (0x34253c13ca08d951, 0x34738ef570827673),
    (0x341aca1a45423b35, 0x3468b369b3c6ec4f),
    (0x3410e3f374dd9d68, 0x345f2e18e05495b4),
    (0x340549be08e15927, 0x3453ab798c59d4c2),
    (0x33fad14d1b2f0b5f, 0x3448ce1e26fb8214),
    (0x33f0e22b05782284, 0x343f4412db819edf),
    (0x33e53f8a0f98a8b8, 0x3433b1f28f8795ca),
    (0x33daba70af1767b0, 0x3428ccf9296410ae),
    (0x33d0cd7bedf59779, 0x341f36eac3bc78c2),
    (0x33c51d9a0dfd2e93, 0x3413a24aae988ae7),
    (0x33ba85d1a4e6bedc, 0x3408affe95ac6f2a),
    (0x33b0a62b7d92f095, 0x33ff06cce511da3e),
    (0x33a4e45f9fa4adff, 0x33f37cb698950bda),
    (0x339a341fe436d2d7, 0x33e8778fdb058321),
    (0x33906cbce44363ec, 0x33deb45ad695330a),
    (0x3384949952fc2371, 0x33d341b44ff4c3c6),
    (0x3379c66ac5ae65b3, 0x33c82469dbf1833e),
    (0x337021ee5a248c7f, 0x33be40a7f340982a),
    (0x33642f4e894cc71a, 0x33b2f2086b6a5cf4),
    (0x33593e1b371520a1, 0x33a7b7a0d21f0262),
    (0x334f8d6a0e0a9508, 0x339dad335f7aacdb),
    (0x3343b5c9cfaada16, 0x33928eb9d3f5000a),
    (0x33389cec0363502d, 0x3387329a5753ca24),
    (0x332eb86f931c309d, 0x337cfbdfc9b64d6e),
    (0x33232991dc38028e, 0x3372190c2136fc76),
    (0x3317e4e079de1a2e, 0x33669705c180d6c1),
    (0x330dc7920bafc5dc, 0x335c2ee925b3e3f6),
    (0x33028c6164ec1235, 0x33519278bf59ff34),
    (0x32f71839bad6a45b, 0x3345e6d30c67b96b),
    (0x32ecbdbf53eed588, 0x333b48d8b08c37b5),
    (0x32e1e01e0cda0c0e, 0x3330fca71267dd26),
    (0x32d6396af97c5f7f, 0x33252428954b7c2f),
    (0x32cb9e1f37f768c9, 0x331a4c779750fb77),
    (0x32c126ceaa621095, 0x33105963d1a5105b),
    (0x32b54b0d08180ac6, 0x33045157f4a2e598),
    (0x32aa6c038fdf5aed, 0x32f93cc0a254a9f5),
    (0x32a062912bcc23f9, 0x32ef552fb3e1c70b),
    (0x32944fd186d008c2, 0x32e370d2466d3327),
    (0x32892ad80b12a09b, 0x32d81cd14bd535bb),
    (0x327f2b20c0b002ab, 0x32cde47d70b3398c),
    (0x32734a760cc47aca, 0x32c2851c338b22e4),
    (0x3267de1218b19542, 0x32b6efdaa9c0e45e),
    (0x325d83f3d3e6d150, 0x32ac64ba5bdb46de),
    (0x32523db7a001a935, 0x32a190c20d5b5808),
    (0x324689215536317f, 0x3295b9128fb09361),
    (0x323bd3e92f58e3ae, 0x328ad9efd6e7e350),
    (0x32312c46cab86e91, 0x3280964c48f92b05),
    (0x32252f60dcf5b390, 0x32747ba5483b6e8f),
    (0x321a1f2ec5b27de2, 0x326948157e97fbd7),
    (0x321018bc93b8e2e5, 0x325f306942454ae6),
    (0x3203d409d78b6819, 0x32533aa83bd4deab),
    (0x31f869c2824b4b6b, 0x3247b300d303ed2c),
    (0x31ee0b212b870715, 0x323d31b83aa1a53b),
    (0x31e27a27826da7a5, 0x3231f90dcff1976e),
    (0x31d6b763e947db08, 0x32261e5684f4d137),
    (0x31cbea20cad09b1f, 0x321b350464c51c99),
    (0x31c1248cf18568a2, 0x3210b99abbccdbb1),
    (0x31b50b87f214792d, 0x32048d7dafad7ffe),
    (0x31a9d2b0d0c4a0b1, 0x31f93e7a4bb07430),
    (0x319fab995891c153, 0x31eefdba02e2ceff),
    (0x3193694f45c1b92f, 0x31e30395337f89bb),
    (0x3187c89c6867890e, 0x31d751e7a10e8264),
    (0x317d20647a807a0c, 0x31cc9649548abac7),
    (0x3171d37ef5f490cd, 0x31c1836b52067807),
    (0x3165cf38f9818abf, 0x31b572b1a2c0293a),
    (0x315aab7b734b99f6, 0x31aa40fcadcdd133),
    (0x31504c7bad04b57c, 0x31a00f779993bbc1),
    (0x3143e9611e821800, 0x3193a3ce69b6a143),
    (0x313850426f2df55d, 0x3188015f467ddd40),
    (0x312dac8e8a813f1f, 0x317d53ae35dbfa26),
    (0x31221972950f570d, 0x3171e7c114a57a33),
    (0x3116118037139874, 0x3165da6aa3adb7a3),
    (0x310ae501496e23f2, 0x315aa895a750e0f6),
    (0x3100614ef7575b09, 0x31504098aca1b898),
    (0x30f3f16033b4da17, 0x3143ce864a4f75bb),
    (0x30e844cb59a101a9, 0x31382070510e6e91),
    (0x30dd84bdf7421499, 0x312d5fe3202b4d44),
    (0x30d1f1777f205012, 0x3121df8a8637ba9c),
    (0x30c5cdae0381ff94, 0x3115bd567e120a1c),
    (0x30ba7b2fd5556b6a, 0x310a6df243f2c6f4),
    (0x30b012cc9c3d142a, 0x31000ec5ed2dbe3e),
    (0x30a380bacb3471d9, 0x30f380b5f70c487d),
    (0x3097a705e88ab4c8, 0x30e7ace6e086aab7),
    (0x308cabc2c3d98d7c, 0x30dcba0a72ae9c08),
    (0x30815e60bb1a2bac, 0x30d16b5cc5019368),
    (0x3075088c08941b89, 0x30c51d84fa353951),
    (0x3069757d44a0d5d1, 0x30b9953a1cf16aad),
    (0x305eccf7568ff3af, 0x30aefb0c5f0312cd),
    (0x30529f5b70afae6e, 0x30a2bfdda4e2b20c),
    (0x304682022c0d8296, 0x3096aeea740e7e26),
    (0x303b30c9decefa86, 0x308b6dd2d215fccf),
    (0x30306a7030db71fb, 0x308093620e33d9f9),
    (0x3023cfce2d301755, 0x30740629fd47fda6),
    (0x3017e609b497d4bf, 0x30682d92bd0fbc5b),
    (0x300cd07ee41894f6, 0x305d2def7b6139fb),
    (0x30015cbd7439af48, 0x3051995fff959855),
    (0x2ff4e9c920d5db05, 0x3045380a4af4c2e9),
    (0x2fe92d9bd168c630, 0x3039921acfd99f39),
    (0x2fde4c4faf832008, 0x302ecccda72dba49),
    (0x2fd2387f5f4b712e, 0x30228a511d87ce7d),
    (0x2fc5e78bc56d0fbb, 0x30164f5f80200f46),
    (0x2fba51f8a6830159, 0x300ad54bef9112d0),
    (0x2faf9c5589e7201f, 0x300020f8e226943e),
    (0x2fa2f918e4d3f95c, 0x2ff3613b89391a8f),
    (0x2f96c3b66970be3d, 0x2fe7465697a54c64),
    (0x2f8b4ce217bd5e55, 0x2fdbf05934cfa1cc),
    (0x2f805caa9cf257c4, 0x2fd0c2b83023243d),
    (0x2f739a5d07601e71, 0x2fc41985de8f7a14),
    (0x2f67797a6e64ddc9, 0x2fb8179bfb69c631),
    (0x2f5c18d454a503ae, 0x2facdd1c2bddbb9e),
    (0x2f50ce808921de57, 0x2fa1481ab5a1469a),
    (0x2f4418b54bd6a895, 0x2f94af20f59f283d),
    (0x2f3804c6e03f60cb, 0x2f88be8c488684b4),
    (0x2f2cb1395c8187f6, 0x2f7d964d959533d1),
    (0x2f21211a1b47d3ae, 0x2f71ae2302fd4bcd),
    (0x2f147143aa78b5fe, 0x2f651eade2a24279),
    (0x2f08626f2553e204, 0x2f593760037df87a),
    (0x2efd1294db79df79, 0x2f4e17b7713cf17f),
    (0x2ef1529206516167, 0x2f41f27cc2724f90),
    (0x2ee4a1fe3e55f964, 0x2f35659e4463ddd1),
    (0x2ed89049c51b8388, 0x2f297f4ffe1284a1),
    (0x2ecd3aa617478594, 0x2f1e5e5db98318a5),
    (0x2ec161c2a1de488e, 0x2f121393590da64b),
    (0x2eb4a9c33e05809a, 0x2f05824d30f3fce1),
    (0x2ea88d45a53c41c5, 0x2ef994b0856743cb),
    (0x2e9d287e1e77c85a, 0x2eee689bae600601),
    (0x2e914e513c1b20dc, 0x2ee210a174166fcd),
    (0x2e8488642c71cfa6, 0x2ed5740f6d4ed277),
    (0x2e785974997b931f, 0x2ec97701e51a6bfe),
    (0x2e6cdc89092e43c3, 0x2ebe36341a88ea0c),
    (0x2e6118b19def65f8, 0x2eb1e9b8ad36fd99),
    (0x2e543ea7a73d5cf0, 0x2ea53b3a109a94ae),
    (0x2e47f60ab495565c, 0x2e9926f55b776f91),
    (0x2e3c5889cb51dbb9, 0x2e8dc853b381e5a0),
    (0x2e30c22190c33c65, 0x2e819fc0dba0e848),
    (0x2e23ce41b9a97542, 0x2e74d91f3701143c),
    (0x2e176552635a3b27, 0x2e68a6663a0ececb),
    (0x2e0b9f88d1e59fb3, 0x2e5d2185735c5ad9),
    (0x2e004c9ca3c242ad, 0x2e51346f1ba5a69a),
    (0x2df339c31e0d51b7, 0x2e445000f1eec014),
    (0x2de6aa95f63dd017, 0x2e37f84791f6fdbb),
    (0x2ddab5b65b277be7, 0x2e2c45998d7521ae),
    (0x2dcf7591b1b1c875, 0x2e20aa3508d5db00),
    (0x2dc2848053b7dfb1, 0x2e13a2fb2a16d1cc),
    (0x2db5c9ffcce7e5fd, 0x2e0720876851d9fb),
    (0x2da9a0421e5c5d71, 0x2dfb3980569c43a5),
    (0x2d9e1fba80d34a41, 0x2df0042910b94342),
    (0x2d91b271db151968, 0x2de2d5e5a1b8288e),
    (0x2d84c872d1af92bc, 0x2dd623e8fb994f23),
    (0x2d78652a61cdcd3b, 0x2dca031b186be289),
    (0x2d6c9f07af149226, 0x2dbe8bd23cc416f0),
    (0x2d60c80f3efbbf3f, 0x2db1ed2fab014c43),
    (0x2d53ab5d5023fe4a, 0x2da507d813502ab7),
    (0x2d470b05029068da, 0x2d98a90544ab274d),
    (0x2d3afb70654af059, 0x2d8ce6f24739f7c7),
    (0x2d2f944d95c81983, 0x2d80edb77098a960),
    (0x2d2278886c5a4d73, 0x2d73d237a2e0f859),
    (0x2d1598c52c5d1746, 0x2d673258d0b919eb),
    (0x2d093d4935512f54, 0x2d5b223e5e67d24a),
    (0x2cfd7b67cefff216, 0x2d4fb93db1e39a21),
    (0x2cf135e695d6d4f8, 0x2d42892e31597360),
    (0x2ce415808da66669, 0x2d35a670a5d83e0e),
    (0x2cd76cfe88ffbfa7, 0x2d29467d9d3bce7d),
    (0x2ccb4f6c22875415, 0x2d1d7e402cf49a21),
    (0x2cbfd2c6816f010b, 0x2d1132f279000564),
    (0x2cb28836b62851b4, 0x2d040cac092d16a6),
    (0x2ca592d26553a529, 0x2cf75c6ad9777c96),
    (0x2c991a14719373e5, 0x2ceb34c7bf3e0108),
    (0x2c8d316bfa6ecf07, 0x2cdfab351a6d7271),
    (0x2c80f79d08c027e2, 0x2cd26c35a8453a6e),
    (0x2c73b6a0443345f1, 0x2cc56c727238c10e),
    (0x2c66e4903f595976, 0x2cb8e6b62ae03487),
    (0x2c5a92756c27d93a, 0x2caceddf1e753b81),
    (0x2c4ed3e286c4c0de, 0x2ca0cbd09b1e5e10),
    (0x2c41dfa945eaae99, 0x2c937e77cf85ca37),
    (0x2c34b749e64b35f5, 0x2c869d3aa6fccfd9),
    (0x2c27ffa0f1fabb65, 0x2c7a388f33976b7b),
    (0x2c1bc9a844ffd2b5, 0x2c6e635a66e3ebe7),
    (0x2c10146a610e0588, 0x2c6199a49bcc5100),
    (0x2c0299b80ea6bb7f, 0x2c54609b0c4183ca),
    (0x2bf5817f72c95e4c, 0x2c4794ce31e24c7b),
    (0x2be8da5a346cbb3f, 0x2c3b468dc95cb829),
    (0x2bdcb4fb203e18a0, 0x2c2f88862b544527),
    (0x2bd0923c6394f695, 0x2c22380a7a548a2f),
    (0x2bc31f510cb3f507, 0x2c150ad48dd9b3a6),
    (0x2bb60e2f23228ded, 0x2c084a97f6b3e853),
    (0x2ba96d0ca88e4fc0, 0x2bfc07484e1da469),
    (0x2b9d4c1f7c67dd18, 0x2bf0298e0fc06037),
    (0x2b90def17046c37e, 0x2be2a16e161fa35f),
    (0x2b836bb3093bcf7f, 0x2bd5771e906a9978),
    (0x2b7658528dc53bd5, 0x2bc8b822865b44e6),
    (0x2b69b2768ee2e280, 0x2bbc73df0b6d4334),
    (0x2b5d89a6c43f4c10, 0x2bb05dee05833b3c),
    (0x2b50f7c5f2e42650, 0x2ba2d206b997c2cc),
    (0x2b437c1bd3bb9cfe, 0x2b95a192e33cf627),
    (0x2b365d3aea4b609e, 0x2b88d9799e5f2521),
    (0x2b29a813d2878f74, 0x2b7c88645e6c88ee),
    (0x2b1d6b5543d3c940, 0x2b705f7d07f3fb02),
    (0x2b10dbd2f003b6a5, 0x2b62c810d60e767e),
    (0x2b034ff297cd534d, 0x2b5588a691f2cd1f),
    (0x2af61cba521cabb4, 0x2b48ad66d03eba59),
    (0x2ae94e44c9a075e7, 0x2b3c44191b160ec2),
    (0x2adcf2449a3fda4b, 0x2b302e2c911c7929),
    (0x2ad08c1bf3c985fa, 0x2b2283e938a586f7),
    (0x2ac2e8d117dfdd44, 0x2b152d41b7968429),
    (0x2ab599268900e7bc, 0x2b0835843f5f0b0c),
    (0x2aa8a84869fc8267, 0x2afba9781881c8a9),
    (0x2a9c22d2c350e306, 0x2aef978cc962d426),
    (0x2a900b7f70f68972, 0x2ae208076f18ea30),
    (0x2a824a6b05eb3eda, 0x2ad492b17a8d9ad4),
    (0x2a74d7351162fad8, 0x2ac77623e1a3ca2f),
    (0x2a67bc0a6e57fbc5, 0x2ababe0fed214bca),
    (0x2a5b045f25c98b4b, 0x2aae77a20528f8f5),
    (0x2a4ebd15c07c2acd, 0x2aa158d7d54f1681),
    (0x2a417a558b9c184f, 0x2a93be755f8b210c),
    (0x2a33ddb38ecb5b52, 0x2a86760d57bb9982),
    (0x2a2691c997f37f0e, 0x2a798a2e123c782e),
    (0x2a19a0db3d2b8dac, 0x2a6d06b3f65f6fd0),
    (0x2a0d166c8f34fca4, 0x2a607c787991a680),
    (0x2a007fb3b2ff1602, 0x2a52b7ec30262d2b),
    (0x29f2b52265317648, 0x2a453e17e1a8afad),
    (0x29e5339d751ff2a1, 0x2a3818627da2e9e4),
    (0x29d80438073219de, 0x2a2b515531d535eb),
    (0x29cb31198aa5f8ab, 0x2a1ef4bcc5f71a72),
    (0x29bec59d00f3fe38, 0x2a1187e74c209a91),
    (0x29b16739cec78bd4, 0x2a03d8a8ccb26cd9),
    (0x29a3ace589cd3352, 0x29f674e5d7be735c),
    (0x29963bbbf78651cc, 0x29e965d9f895d99c),
    (0x29891c922f9ee4c0, 0x29dcb5d51a48d7d4),
    (0x297c5941f108d9d1, 0x29d0382d1e479246),
    (0x296ffcc62473097a, 0x29c25120afe02122),
    (0x296209ad26ca18d9, 0x29b4acee7c0fcbaf),
    (0x2954554e9983b016, 0x29a753919ff4b182),
    (0x2946e8db855aac9a, 0x299a4dede3a3eb93),
    (0x2939ccc1bfbf7ecb, 0x298da5e8d4d639ed),
    (0x292d0a5ff60b92cf, 0x2980b342b640cc13),
    (0x2920560f8bafb2c7, 0x2972ce013e375d0f),
    (0x29125ec7207b3c64, 0x296529fe13854ed9),
    (0x2904a5c0b3b7424d, 0x2957cec854a40ddc),
    (0x28f732197e24d857, 0x294ac4c46230c45c),
    (0x28ea0bb46a0a2c53, 0x293e15420dda8758),
    (0x28dd3b4e4b894768, 0x2930e54a78756b6b),
    (0x28d0654a030d3e70, 0x2922f8178dd14a04),
    (0x28c2621d65152a67, 0x2915495f2949c65e),
    (0x28b49a0d4c97c281, 0x2907e02609a87253),
    (0x28a713a5a10cc9b0, 0x28fac4304f253262),
    (0x2899d62205df47a6, 0x28edfe14a435c3c2),
    (0x288ce97f23783a55, 0x28e0cba8970a9d66),
    (0x28802b46c188f22d, 0x28d2cd3135c626d1),
    (0x287213830f44d648, 0x28c5096e15b063db),
    (0x286432d063e4cc5a, 0x28b786c2636e4e2a),
    (0x28568f1646f450cc, 0x28aa4c39680abb0b),
    (0x28492ed52465cf13, 0x289d6196b3830612),
    (0x283c1934bb7035c1, 0x289067b3db09279e),
    (0x282f5613cdc1ad52, 0x28824f8b72bbd6ee),
    (0x2821770c93ef3136, 0x28746d8046ba690c),
    (0x281375630e92b790, 0x2866c744b66f6406),
    (0x2805ab4549d6cf15, 0x2859631ba1694964),
    (0x27f81e6d5efc2ece, 0x284c47e5b8f9de0c),
    (0x27ead523512d80ae, 0x283f7d2ff106229c),
    (0x27ddd649c8fad0d5, 0x283185a192bd02b4),
    (0x27d094b5ecc6e290, 0x28237d9a85948033),
    (0x27c26b65f14cd4da, 0x2815ab7d4224f7e2),
    (0x27b473b9d1931175, 0x280814bdb918424d),
    (0x27a6b2a2c93cd65a, 0x27fabf540fb4e1a1),
    (0x27992d87cacce695, 0x27edb1c82f79707d),
    (0x278bea4f9488e121, 0x27e0799f1fb897d8),
    (0x277eef6b8bfa9225, 0x27d245c20ba28a39),
    (0x277121f1b69882eb, 0x27c4418fde75923e),
    (0x2762f7b0edc74f1c, 0x27b671af7f5d8858),
    (0x2754fd20f15083b3, 0x27a8db341e4d4306),
    (0x274736cebb19a201, 0x279b83a639f29a80),
    (0x2739a9ae80c06018, 0x278e710d5155d028),
    (0x272c5b240b14f4d6, 0x2780d4fd25f7f52e),
    (0x271f510ba62354a5, 0x27729ac951c1e60b),
    (0x271148e1d96c299e, 0x27648dce2dc3ecd5),
    (0x2703121b71d77179, 0x2756b2456938b866),
    (0x26f507f397188496, 0x27490cc63cdbf2a2),
    (0x26e72e7cbdbb95db, 0x273ba24cc0f4c8e2),
    (0x26d98a2111174d79, 0x272e7841c45926d0),
    (0x26cc1fa91a869695, 0x2720ca4195cda6d3),
    (0x26bef442d8796795, 0x27127eb66fea5e85),
    (0x26b106c4a594a047, 0x27045cf12a60cb9a),
    (0x26a2b8c63e7468c1, 0x26f668ac570f2fc8),
    (0x2694936d06178106, 0x26e8a5f0c63b5c24),
    (0x26869a431ed205a0, 0x26db191b44e70edf),
    (0x2678d11ace4d8996, 0x26cdc6e2b76185d5),
    (0x266b3c139841a735, 0x26c05a2f4a403a4d),
    (0x265ddf9fa6fc513a, 0x26b1f386e3013e68),
    (0x26506044c28d2704, 0x26a3b26ef9596f74),
    (0x2641f1fd15ed30fe, 0x26959a199b7c8167),
    (0x2633a7bfb4be9962, 0x2687adf828472cfd),
    (0x2625848951944920, 0x2679f1bfa110cbba),
    (0x26178b8ffae32bf0, 0x266c696d39db75f3),
    (0x2609c046dcaa75a4, 0x265f194b2a4cb970),
    (0x25fc2662350ce7fa, 0x265102fae0ec7794),
    (0x25eec1db7d8e44b5, 0x26429a3060c44f3a),
    (0x25e0cb7ae5506e7e, 0x263454ee7edd0063),
    (0x25d255213192c405, 0x2626360f251c2f1f),
    (0x25c40052c8ba04b4, 0x261840a0d97bb129),
    (0x25b5cfadd7b97160, 0x260a77ea01d8b821),
    (0x25a7c5ff3799c35b, 0x25fcdf6c504a93e5),
    (0x2599e64530b957f4, 0x25ef7ae8590bb800),
    (0x258c33b25da2082e, 0x25e12730a9790f69),
    (0x257eb1b0ae0a386a, 0x25d2af1081b22794),
    (0x2570b1f245435eea, 0x25c4575deb5305a2),
    (0x256227180cb0a8ca, 0x25b6228a92a17423),
    (0x2553ba5b5279aa24, 0x25a81331d3a2cc81),
    (0x25456df011e743b9, 0x259a2c1b0ae83a64),
    (0x2537442e7172840a, 0x258c703bfdc748cd),
    (0x25293f94a8e393e5, 0x257ee2bb5a2a4470),
    (0x251b62c8f87855a8, 0x2570c379a70923bc),
    (0x250db09bb0ffb21f, 0x2562303a1b68b2de),
    (0x25001604a662bf4c, 0x2553b983b3f72fb5),
    (0x24f16c1e4c8c451a, 0x2545615904c6373a),
    (0x24e2dc48781056c9, 0x253729dc070c926a),
    (0x24d4684a4152d4e0, 0x2529154f9f73ee5f),
    (0x24c6120558a89b12, 0x251b26192fa2f36e),
    (0x24b7db773a6f6623, 0x250d5ec232ba3385),
    (0x24a9c6ba6a49465a, 0x24ffc1f9e46a53e2),
    (0x249bd607b51aff83, 0x24f1294b791c6529),
    (0x248e0bb7795ebab2, 0x24e289cc9b3b4107),
    (0x248035217aa6e0ad, 0x24d40415be2c6028),
    (0x24717a22cd2a508f, 0x24c599d2a64857ab),
    (0x2462d63f329a8bcb, 0x24b74cc660d4897a),
    (0x24544ae89d144108, 0x24a91ecc31adec4e),
    (0x2445d9a42222275c, 0x249b11d883fd3ec1),
    (0x2437840aaba80c98, 0x248d27f9dd765764),
    (0x24294bc9a9955f26, 0x247f6359d3980ea5),
    (0x241b32a3c3e46a35, 0x2470e31f012ad2b3),
    (0x240d3a718c61d154, 0x2462298481c2ca0d),
    (0x23ff65222fadfc00, 0x2453861db33230b0),
    (0x23f0da5e12700c8d, 0x2444fa3a533642f6),
    (0x23e215aeed941b43, 0x2436873a105b43c2),
    (0x23d3659f3261d190, 0x24282e8d038330ca),
    (0x23c4cb570f463d9d, 0x2419f1b427ce89a2),
    (0x23b6480ba9b1723c, 0x240bd241d06b6757),
    (0x23a7dcff6d521467, 0x23fdd1da1bc7ec85),
    (0x23998b82586ccf2d, 0x23eff233639de02a),
    (0x238b54f244df93df, 0x23e11a8b54a30c34),
    (0x237d3abb2d5b9282, 0x23d24e2ffedd9f78),
    (0x236f3e576e5bfb2c, 0x23c394ff72563c26),
    (0x2360b0a8012d71fb, 0x23b4effb58fcce20),
    (0x2351d29e5c60946b, 0x23a6602f707600f3),
    (0x234305e23384e58a, 0x2397e6b1b23c38f4),
    (0x23344b4e89c6a35f, 0x238984a277e8539a),
    (0x2325a3c60cb2c6b1, 0x237b3b2c9b4277c6),
    (0x23171033226bf0af, 0x236d0b8591b88278),
    (0x23089187f3d75a14, 0x235ef6ed82d51675),
    (0x22fa28be72757b85, 0x23507f57aca805f1),
    (0x22ebd6d859990532, 0x2341921067277b5d),
    (0x22dd9cdf2aadd6a6, 0x2332b45137355f77),
    (0x22cf7be424410479, 0x2323e6cfcc06ed27),
    (0x22c0ba8019bd4e86, 0x23152a47395ed2ae),
    (0x22b1c4a9efdce654, 0x23067f77ef705254),
    (0x22a2dd03980220ac, 0x22f7e727aec99554),
    (0x22940424c4fd21f7, 0x22e96221780dfe95),
    (0x22853aa8c500f5d0, 0x22daf1357749947c),
    (0x2276812e6a2e8fc0, 0x22cc9538eaa71fb0),
    (0x2267d857ef6fe55a, 0x22be4f0604536408),
    (0x225940cad97ee071, 0x22b00fbde3ac71c6),
    (0x224abb2fd3f529ef, 0x22a103beefa07650),
    (0x223c48328a4346eb, 0x229203fa39242793),
    (0x222de8817c6f33b9, 0x228310e5f6fbfd44),
    (0x221f9ccdcf7c94fe, 0x22742afa66f9fdc1),
    (0x2210b2e58cb15f5c, 0x226552b1ae6aeaa2),
    (0x2201a217943b9ac7, 0x22568887b7750462),
    (0x21f29c58e31af831, 0x2247ccfa0b55e3f7),
    (0x21e3a2063aa9bfc9, 0x22392087a96ea8f4),
    (0x21d4b37d15842e1d, 0x222a83b0db0fa5b6),
    (0x21c5d11b81c3fea7, 0x221bf6f703f6c8b1),
    (0x21b6fb3ff8ccf41c, 0x220d7adc6f76430f),
    (0x21a8324934a763f4, 0x21ff0fe41a3b588b),
    (0x2199769602e7d2c4, 0x21f05b48bc57ed71),
    (0x218ac8851524d431, 0x21e137b41cf9c9a4),
    (0x217c2874cefea298, 0x21d21d7603b6e2cc),
    (0x216d96c311be3eb3, 0x21c30cd0207d04ed),
    (0x215f13cd05945d89, 0x21b40603dadb780a),
    (0x21504ff770417c7e, 0x21a509522cc01f2f),
    (0x21411dc1d57f7df8, 0x219616fb7b910c11),
    (0x2131f372812d1e14, 0x21872f3f6faafe57),
    (0x2122d1356c845fd1, 0x2178525cca4f244d),
    (0x2113b7359a6b9391, 0x216980913a0c5f1e),
    (0x2104a59cf5958098, 0x215aba192db244fd),
    (0x20f59c942db45eae, 0x214bff2fa5de1e9d),
    (0x20e69c4293cefa3f, 0x213d500e0534289d),
    (0x20d7a4cdf5c8de47, 0x212eacebdf5973c2),
    (0x20c8b65a792fe140, 0x21200aff63626acf),
    (0x20b9d10a7562f377, 0x2110c5bd0cbfba30),
    (0x20aaf4fe4d278bf9, 0x210186c76677c8f7),
    (0x209c225447c48b85, 0x20f24e359c6528bb),
    (0x208d592869bae136, 0x20e31c1d70a5a26c),
    (0x207e99944d35a898, 0x20d3f09320694d40),
    (0x206fe3aefa4cdaa2, 0x20c4cba948866255),
    (0x20609bc65f9b8064, 0x20b5ad70c9e433d4),
    (0x20514a9f8443d058, 0x20a695f8add0a062),
    (0x2041fe6a1ccca721, 0x2097854e0a5444cf),
    (0x2032b72bc2a1bb29, 0x20887b7be69a8c26),
    (0x202374e8637e822f, 0x2079788b1f83908e),
    (0x201437a22e46ffc9, 0x206a7c824c7683f1),
    (0x2004ff5980398e02, 0x205b8765a48c0cf1),
    (0x1ff5cc0cd28b81e5, 0x204c9936e428a9d9),
    (0x1fe69db8a882e290, 0x203db1f5331fbe71),
    (0x1fd774577e1faf4f, 0x202ed19d0b78718c),
    (0x1fc84fe1b767669b, 0x201ff82820edeaab),
    (0x1fb9304d9065a4b9, 0x201092c6a4a26abf),
    (0x1faa158f0df4c356, 0x20012ce032c827ce),
    (0x1f9aff97ef6163ed, 0x1ff1ca5926404568),
    (0x1f8bee57a0fbbbdc, 0x1fe26b285aeabdbe),
    (0x1f7ce1bb2fa9523e, 0x1fd30f431387ee69),
    (0x1f6dd9ad3d89a4a5, 0x1fc3b69cf0bd5608),
    (0x1f5ed615f7bfd7d2, 0x1fb46127e8d37ba7),
    (0x1f4fd6db0d73348e, 0x1fa50ed44039bd53),
    (0x1f406defd40bdb09, 0x1f95bf9082dc8412),
    (0x1f30f2823287afb6, 0x1f8673497e5a0d03),
    (0x1f217913a85a33a7, 0x1f7729ea3d219a53),
    (0x1f120191f16dc709, 0x1f67e35c0288722e),
    (0x1f028be97e6e9065, 0x1f589f8647df9662),
    (0x1ef31805749922c3, 0x1f495e4eba9494ca),
    (0x1ee3a5cfae5998ec, 0x1f3a1f993b67371d),
    (0x1ed43530bcc0ee3a, 0x1f2ae347debd3070),
    (0x1ec4c60fe9d5cbc1, 0x1f1ba93aee1c301f),
    (0x1eb558533bc564e3, 0x1f0c7150ead1fd0e),
    (0x1ea5ebdf78f85a03, 0x1efd3b6691d169e3),
    (0x1e9680982d0eea8a, 0x1eee0756e0ca137b),
    (0x1e87165faec70a10, 0x1eded4fb1c7fef16),
    (0x1e77ad1726ce2f3c, 0x1ecfa42ad866b600),
    (0x1e68449e977fef01, 0x1ec03a5dffc21d0d),
    (0x1e58dcd4e591ac76, 0x1eb0a3416f4dd0f1),
    (0x1e497597e1aad586, 0x1ea10ca917d13a59),
    (0x1e3a0ec452e85047, 0x1e91767d933fa0f7),
    (0x1e2aa8360248e3ed, 0x1e81e0a6bf884441),
    (0x1e1b41c7c6ff8cc6, 0x1e724b0bc63cac6b),
    (0x1e0bdb5393a7ccd2, 0x1e62b59324d7fd9b),
    (0x1dfc74b284572b4c, 0x1e532022b5a4d882),
    (0x1ded0dbced86364c, 0x1e438a9fb93eb860),
    (0x1ddda64a6bca7ad0, 0x1e33f4eee0ab230d),
    (0x1dce3e31f45a0a96, 0x1e245ef458066425),
    (0x1dbed549e6504cf2, 0x1e14c893d1bef1fe),
    (0x1daf6b681cab013b, 0x1e0531b0925a021e),
    (0x1da00031007ac3e3, 0x1df59a2d7cbb3c39),
    (0x1d904a064f4bdd38, 0x1de601ed1ee8e719),
    (0x1d80931e5b5e6c43, 0x1dd668d1bf455ad8),
    (0x1d70db636a632668, 0x1dc6cebd6a35f863),
    (0x1d6122bfb19eafe7, 0x1db73392002f5fc2),
    (0x1d51691d609b1ec9, 0x1da79731441e1e21),
    (0x1d41ae66ac0b0b6a, 0x1d97f97cea22928b),
    (0x1d31f285d8d6c817, 0x1d885a56a6965552),
    (0x1d223565474c154e, 0x1d78b9a03d510324),
    (0x1d1276ef7e686add, 0x1d69173b9121e9f7),
    (0x1d02b70f3735b79f, 0x1d59730ab373bc61),
    (0x1cf2f5af68314ac2, 0x1d49cceff40f1fb1),
    (0x1ce332bb50b471fb, 0x1d3a24cdf0f0a2e7),
    (0x1cd36e1e845638bb, 0x1d2a7a87a6267113),
    (0x1cc3a7c4f63d9d53, 0x1d1ace007da9e0c8),
    (0x1cb3df9b045b81fc, 0x1d0b1f1c5f28dcc9),
    (0x1ca4158d828399ae, 0x1cfb6dbfbfb30836),
    (0x1c944989c55b9312, 0x1cebb9cfb13e7262),
    (0x1c847b7dad17cf31, 0x1cdc0331f1f7ac71),
    (0x1c74ab57affd05a9, 0x1ccc49ccfb511d2c),
    (0x1c64d906e49e5535, 0x1cbc8d8810c585d4),
    (0x1c55047b0bcf6527, 0x1cacce4b4e41cdca),
    (0x1c452da49a426b16, 0x1c9d0bffb62a59f5),
    (0x1c355474c1ca1f2b, 0x1c8d468f3ef07049),
    (0x1c2578dd7a37e92b, 0x1c7d7de4e02c6f6f),
    (0x1c159ad189ced845, 0x1c6db1ec9f31f5e1),
    (0x1c05ba448d444792, 0x1c5de2939b1372f7),
    (0x1bf5d72aff4768da, 0x1c4e0fc8180b06b8),
    (0x1be5f17a3f894e1d, 0x1c3e39798a3f0a89),
    (0x1bd60928993f7077, 0x1c2e5f989fd91cad),
    (0x1bc61e2d491b1f68, 0x1c1e82174a67122f),
    (0x1bb6308082b0b65c, 0x1c0ea0e8c77dc629),
    (0x1ba6401b7549eebb, 0x1bfebc01a8965943),
    (0x1b964cf8501f223b, 0x1beed357da1f18ba),
    (0x1b86571245f3d39a, 0x1bdee6e2a9b9efd0),
    (0x1b765e6590135a00, 0x1bcef69acba2f951),
    (0x1b6662ef70ab154b, 0x1bbf027a5f3a7f56),
    (0x1b5664ae34801e0e, 0x1baf0a7cf2ae7563),
    (0x1b4663a133fef350, 0x1b9f0e9f85c03b41),
    (0x1b365fc8d3a43882, 0x1b8f0ee08ba43cd5),
    (0x1b26592683be2829, 0x1b7f0b3febf9cbcd),
    (0x1b164fbcbf86f1ab, 0x1b6f03bf02da5a7a),
    (0x1b06438f0b98cab0, 0x1b5ef860a0000a7a),
    (0x1af634a1f3bd0d7e, 0x1b4ee92905044d53),
    (0x1ae622fb08184d56, 0x1b3ed61de2b81fc4),
    (0x1ad60ea0d9b5d711, 0x1b2ebf4655983167),
    (0x1ac5f79af6759efd, 0x1b1ea4aae160108a),
    (0x1ab5ddf1e460242c, 0x1b0e86556bc034fe),
    (0x1aa5c1af1c6454be, 0x1afe6451363b8311),
    (0x1a95a2dd0483fd76, 0x1aee3eaad7319948),
    (0x1a858186e973c8cb, 0x1ade1570321beee3),
    (0x1a755db8f7b445c6, 0x1acde8b06f0475d8),
    (0x1a6537803429dd3d, 0x1abdb87bf13d1856),
    (0x1a550eea743a03b0, 0x1aad84e44d6006fd),
    (0x1a44e406557456e3, 0x1a9d4dfc3ea1615f),
    (0x1a34b6e334ceafc3, 0x1a8d13d79b7b4d75),
    (0x1a248791257b832e, 0x1a7cd68b49be13bd),
    (0x1a145620e7623619, 0x1a6c962d320e4c77),
    (0x1a0422a3dd414b5e, 0x1a5c52d432db963c),
    (0x19f3ed2c02828af5, 0x1a4c0c9812daaed1),
    (0x19e3b5cbe0c97302, 0x1a3bc391730e1bf4),
    (0x19d37c9685446b6b, 0x1a2b77d9c068db21),
    (0x19c3419f75c953bc, 0x1a1b298b2516cc35),
    (0x19b304faa5c619af, 0x1a0ad8c07976bbc0),
    (0x19a2c6bc6b0e1424, 0x19fa859534d21642),
    (0x199286f9728ce321, 0x19ea30255dde65be),
    (0x198245c6b4e79163, 0x19d9d88d7b14c6d3),
    (0x197203396b14a770, 0x19c97eea82eb8229),
    (0x1961bf6702f3caf4, 0x19b92359cbfdea74),
    (0x19517a6513ed67fa, 0x19a8c5f8fd2e86f6),
    (0x1941344953a2bc16, 0x199866e5fdcf6e5c),
    (0x1930ed298ab66e97, 0x1988063ee5dc8676),
    (0x1920a51b89b5ac38, 0x1977a421ee53231b),
    (0x19105c351e298147, 0x196740ad61b23997),
    (0x1900128c07d7eac9, 0x1956dbff8cae0f32),
    (0x18ef906bdc779cfc, 0x19467636af21f0cb),
    (0x18defa90ac757637, 0x19360f70ed4a200e),
    (0x18ce63b1303dfbfb, 0x1925a7cc414fb8aa),
    (0x18bdcbf7abb88524, 0x19153f666d2fde17),
    (0x18ad338de3492428, 0x1904d65ced070949),
    (0x189c9a9d09a6515f, 0x18f46ccce9c8cdf5),
    (0x188c014dae645fc3, 0x18e402d32c6be96d),
    (0x187b67c7ad400b86, 0x18d3988c1191e211),
    (0x186ace321e309c7b, 0x18c32e137db0ef23),
    (0x185a34b346493cc3, 0x18b2c384d1c64d5b),
    (0x18499b70897047dc, 0x18a258fae0968e74),
    (0x1839028e5cf277c7, 0x1891ee8fe480d92c),
    (0x18286a303af6f699, 0x1881845d75e974c6),
    (0x1817d27896d87b8e, 0x18711a7c823f5ff5),
    (0x18073b88d266bc5a, 0x1860b10543a01766),
    (0x17f6a58134129f18, 0x1850480f391c14fc),
    (0x17e61080de06bfb0, 0x183fbf623f3bedba),
    (0x17d57ca5c62d05dd, 0x182ef001d6eb49df),
    (0x17c4ea0caf213789, 0x181e222785106b16),
    (0x17b458d1220fa79d, 0x180d55fbee497e00),
    (0x17a3c90d697e5b5d, 0x17fc8ba606fb6833),
    (0x17933ada8cfe418f, 0x17ebc34b0b8bbc60),
    (0x1782ae504dc15f24, 0x17dafd0e79df00eb),
    (0x1772238524122580, 0x17ca39120c175c51),
    (0x17619a8e3da77fbe, 0x17b97775b48ec1aa),
    (0x1751137f7cd08642, 0x17a8b8579b06ca2c),
    (0x17408e6b787233ba, 0x1797fbd41b078795),
    (0x17300b637cd0ec0b, 0x17874205c365c73e),
    (0x171f14ef1a3e4ac2, 0x17768b0556e87723),
    (0x170e176ccb941b53, 0x1765d6e9ce0425a7),
    (0x16fd1e5afef936da, 0x175525c859a2ea9a),
    (0x16ec29d225a230e3, 0x174477b466ee6cc1),
    (0x16db39e83951bdaa, 0x1733ccbfa4112a58),
    (0x16ca4eb0c6436cf4, 0x172324fa05e3adc4),
    (0x16b9683cf6400112, 0x17128071ce79e917),
    (0x16a8869b9cc95345, 0x1701df33948493fa),
    (0x1697a9d9444b613e, 0x16f1414a4b7a1729),
    (0x1686d2003c3fdf54, 0x16e0a6bf4c7a4f95),
    (0x1675ff18a8317f0a, 0x16d00f9a5fe04069),
    (0x166531288f8c01c7, 0x16bef7c38ee94e41),
    (0x16546833ee262b10, 0x16add73492689d20),
    (0x1643a43cc572b3d3, 0x169cbd8e7539eac7),
    (0x1632e5432e458097, 0x168baad518e7426e),
    (0x16222b456b1a8db7, 0x167a9f09adee91e3),
    (0x1611763ffacc46ac, 0x16699a2acce5bd7f),
    (0x1600c62daba74e7c, 0x16589c349043d67e),
    (0x15f01b07aeca1f42, 0x1647a520aeb63fae),
    (0x15dee98b577ea7ca, 0x1636b4e695e9099f),
    (0x15cda6bba883d22a, 0x1625cb7b85aa6067),
    (0x15bc6d89f0368fc1, 0x1614e8d2ab5187d6),
    (0x15ab3ddd3216f86e, 0x16040cdd3d52967c),
    (0x159a1799fd5925f4, 0x15f3378a96e8e29a),
    (0x1588faa294857a39, 0x15e268c853c2e48d),
    (0x1577e6d714d6fce7, 0x15d1a0826b9b2f1e),
    (0x1566dc159d3dbce3, 0x15c0dea34dab05c3),
    (0x1555da3a74ec8bc7, 0x15b02313fbe40a01),
    (0x1544e120315adc06, 0x159edb784bbee452),
    (0x1533f09fdba5037e, 0x158d7d0486e476cc),
    (0x152308911536a23d, 0x157c2a975dad9be0),
    (0x151228ca3bac6e07, 0x156ae3f97cbb25ce),
    (0x150151208bdc254e, 0x1559a8f1bb2e0d78),
    (0x14f0816843f2edd8, 0x154879454bd5bf1a),
    (0x14df72e98937c4f8, 0x153754b7ed21d736),
    (0x14cdf23162441e8b, 0x15263b0c17c2af00),
    (0x14bc804c1d0522eb, 0x15152c032be62aab),
    (0x14ab1cdcc2ca0214, 0x1504275d9d00481d),
    (0x1499c78595e362ce, 0x14f32cdb1c10f0ee),
    (0x14887fe848fd6bff, 0x14e23c3ac05a8c19),
    (0x147745a6341bd9d3, 0x14d1553b2e7eba16),
    (0x14661860872f36c7, 0x14c0779abdf88654),
    (0x1454f7b87a3ccd22, 0x14af462f39da55f5),
    (0x1443e34f7b15484d, 0x149daedfe49c8a9f),
    (0x1432dac758984610, 0x148c28c3fc94131b),
    (0x1421ddc26b854422, 0x147ab358720f461f),
    (0x1410ebe3bcdc6652, 0x14694e1adf5ef17a),
    (0x140004cf29d383af, 0x1457f889bf8109c7),
    (0x13ee50530acb7a2b, 0x1446b224a16aa4e0),
    (0x13dcab316f0b29de, 0x14357a6c57f8fed2),
    (0x13cb1987b3f62cd2, 0x142450e32693ba8d),
    (0x13b99aa6a5f22416, 0x1413350cea8cd61a),
    (0x13a82de1daeb9c47, 0x1402266f414ce57b),
    (0x1396d28fdea9871a, 0x13f12491ab5c17d9),
    (0x1385880a5ae03598, 0x13e02efdac5a4ff4),
    (0x13744dae3b23367b, 0x13ce8a7dcff4677c),
    (0x136322dbccd73cab, 0x13bccdc67829105b),
    (0x135206f6db46b930, 0x13ab26f5afd4ebc9),
    (0x1340f966c7fd2396, 0x13999530a15ce61a),
    (0x132ff32d3f1c0a49, 0x138817a166d90dbd),
    (0x131e0dea55db81c4, 0x1376ad7728d6db01),
    (0x130c41e9fb058b1e, 0x136555e63841a093),
    (0x12fa8e19002cb47f, 0x1354102823a6a0a2),
    (0x12e8f16bf19917ac, 0x1342db7bc80b123e),
    (0x12d76adf2095d808, 0x1331b7255d8af1ce),
    (0x12c5f976a86ba7a3, 0x1320a26e7ff7c8a0),
    (0x12b49c3e6e576cf8, 0x130f394c675d5da1),
    (0x12a3524a1ccb90ce, 0x12fd4a41cdb95576),
    (0x12921ab51a49a640, 0x12eb7670ded07be7),
    (0x1280f4a27c210b83, 0x12d9bc980b6cd88b),
    (0x126fbe79eabbab8b, 0x12c81b807901b2dd),
    (0x125db36d8463b3e1, 0x12b691fdebe382be),
    (0x124bc693203fe92c, 0x12a51eeeac7320be),
    (0x1239f66cc65fb2cb, 0x1293c13b67a17ff2),
    (0x1228418af0dd65ed, 0x128277d70b2ebc6f),
    (0x1216a68c4bfd764b, 0x127141be9e049453),
    (0x1205241d71eb6e19, 0x12601df915097b64),
    (0x11f3b8f8a28fd848, 0x124e172e498cd2fc),
    (0x11e263e577f574d0, 0x123c1366206ca036),
    (0x11d123b897af1af4, 0x122a2ee0ea25a216),
    (0x11bfeea6c3554149, 0x121867f82bdccb8f),
    (0x11adbb4739afff2e, 0x1206bd1744d1513e),
    (0x119bab46440d8e4b, 0x11f52cbafb8bc99f),
    (0x1189bcaf0aad775c, 0x11e3b571085ef9db),
    (0x1177eda37d26ae66, 0x11d255d79dbe3905),
    (0x11663c5ba199716f, 0x11c10c9ceee61d28),
    (0x1154a724e2f6eade, 0x11afb0fd6a99ec28),
    (0x11432c615eef6a3d, 0x119d70936a92f04a),
    (0x1131ca87340e1c39, 0x118b55b284add8c1),
    (0x1120801fd07f7284, 0x11795e2d86ae92c8),
    (0x110e978e83ebd95d, 0x116787f26e598ebb),
    (0x10fc58570e2f641d, 0x1155d10973fbab06),
    (0x10ea4017c5ace0de, 0x1144379416dfac63),
    (0x10d84c7064147f81, 0x1132b9cc2c3d6738),
    (0x10c67b20873fc995, 0x11215602f1227af8),
    (0x10b4ca0667456eb8, 0x11100aa01fc8a73e),
    (0x10a3371d92c55c69, 0x10fdac421184af19),
    (0x1091c07db1df4cf6, 0x10eb6e2f60b615c1),
    (0x108064595037ce7b, 0x10d95853e0fd75ad),
    (0x106e41f95cc492ce, 0x10c768213ee2ba9c),
    (0x105be99935f38c42, 0x10b59b2d772c1b04),
    (0x1049bc8aa74c3805, 0x10a3ef3138f8ae58),
    (0x1037b7f2dc7fa066, 0x1092620652c3102c),
    (0x1025d92194746ef2, 0x1080f1a62a97a48e),
    (0x10141d8f14e2d235, 0x106f38508375a815),
    (0x100282da2ee06e9f, 0x105cbf8187da9700),
    (0x0ff106c65473611b, 0x104a757e44dde4fb),
    (0x0fdf4e737e667fe6, 0x1038571975a9ba0c),
    (0x0fccc4774fe05a13, 0x102661571375ee31),
    (0x0fba6be51e94d2c3, 0x10149169d29f057f),
    (0x0fa841452e30c6ec, 0x1002e4b0b7596d86),
    (0x0f964157d8dbcaa1, 0x0ff158b4c1d7aa61),
    (0x0f84691284199248, 0x0fdfd64d63539ac4),
    (0x0f72b59cb5fcd070, 0x0fcd33b9c01b8858),
    (0x0f61244d4a198783, 0x0fbac5a261b57bd2),
    (0x0f4f654f8b2c9938, 0x0fa8883e334bf813),
    (0x0f3cbcb3935e8707, 0x0f9678037d69a88a),
    (0x0f2a4a7147e53789, 0x0f8491a44a8cc267),
    (0x0f180a7df6e9e4ab, 0x0f72d20af56e98e4),
    (0x0f05f9153468350d, 0x0f613656dff66048),
    (0x0ef412b4a3b0b6bb, 0x0f4f77b2a384d071),
    (0x0ee25417f5fe18aa, 0x0f3cc024fa52d21e),
    (0x0ed0ba351c6b2c44, 0x0f2a415d531b6e85),
    (0x0ebe847157246bfc, 0x0f17f70703ac5558),
    (0x0eabd304de355d85, 0x0f05dd1b0bb84b26),
    (0x0e995b4456f24a66, 0x0ef3efdb3b369292),
    (0x0e8718a9184a8678, 0x0ee22bcd99dbdb06),
    (0x0e7507007917e3d9, 0x0ed08db80d427d79),
    (0x0e632266540e08c2, 0x0ebe253876b38ace),
    (0x0e51673fda512b46, 0x0eab6f674d703273),
    (0x0e3fa46d62b8e57d, 0x0e98f4d804e3ad6f),
    (0x0e2cc068b1dc8ab2, 0x0e86b0c7763ce52b),
    (0x0e1a1cbbab815b4c, 0x0e749ecd657d5dd6),
    (0x0e07b41f3bcb1869, 0x0e62bad65a82bb23),
    (0x0df581b387627669, 0x0e51011dd6dfecf6),
    (0x0de380f8b864e1ac, 0x0e3edc51c8649aaa),
    (0x0dd1adc83c96accf, 0x0e2bfd81ed74f1cd),
    (0x0dc0044e6f2b903f, 0x0e195fde403b5724),
    (0x0dad0209514d613d, 0x0e06fdef1ca550b3),
    (0x0d9a41575f0363d6, 0x0df4d2aaa5b8e28a),
    (0x0d87c08d08f2ccbb, 0x0de2d96cdd2a30b8),
    (0x0d757a2b0b1c4c86, 0x0dd10df03cd711e3),
    (0x0d636923c5eb270b, 0x0dbed88d96607fb4),
    (0x0d5188d2c2d680a3, 0x0dabe1a747b458c8),
    (0x0d3fa9e995f4c414, 0x0d993089dc23e417),
    (0x0d2c93410e8142f8, 0x0d86bf1c754a3325),
    (0x0d19c67f441e11b3, 0x0d7487c687197597),
    (0x0d073d10c597b774, 0x0d6285660efb3e9a),
    (0x0cf4f0ef77c81a6f, 0x0d50b34677fe9486),
    (0x0ce2dc9788ad9864, 0x0d3e1a30436bcde5),
    (0x0cd0fafd2c40ba27, 0x0d2b1dd0ffc5d04b),
    (0x0cbe8f062cc963ce, 0x0d186a35930ed5e1),
    (0x0cab7be34be4e18d, 0x0d05f8c25cd122d7),
    (0x0c98b4dd6af9c05d, 0x0cf3c36d15093021),
    (0x0c8632ec0e0d009c, 0x0ce1c4b11ed6627a),
    (0x0c73efa480ea698b, 0x0ccfef096f5252f0),
    (0x0c61e52cde409267, 0x0cbcae9de8f00c0b),
    (0x0c500e3012bd4171, 0x0ca9bfbcfe9dc1e8),
    (0x0c3ccba595fe34b5, 0x0c971ac2109d33c9),
    (0x0c29cf52785fcd1f, 0x0c84b8b6bbdb7a4f),
    (0x0c171f5b701cb667, 0x0c72934441fdae8b),
    (0x0c04b46ffc2e70cc, 0x0c60a4a61359d63a),
    (0x0bf287ea78b8278f, 0x0c4dcf3acd0cc1f4),
    (0x0be093c166d47d90, 0x0c3aaecb94ca24e1),
    (0x0bcda4f3c5b8c56f, 0x0c27df554174928c),
    (0x0bba7e3665ffae25, 0x0c1558fae0fed7aa),
    (0x0ba7aa46b2ec675c, 0x0c03149a005e5984),
    (0x0b9520f92dcad4a2, 0x0bf10bba52994e8e),
    (0x0b82dae795ce73b6, 0x0bde70fd5d6d806d),
    (0x0b70d15f439254be, 0x0bcb2b2e959996b0),
    (0x0b5dfca1ff236f02, 0x0bb83c6a3841fcca),
    (0x0b4ab8846c89a496, 0x0ba59bfc8bdbfffe),
    (0x0b37cc7edd2bedd1, 0x0b93420703d360ea),
    (0x0b252f9fd29afa7b, 0x0b81276cde31355e),
    (0x0b12d9d4a3bfacfa, 0x0b6e8b82d35e9882),
    (0x0b00c3d4d5746632, 0x0b5b2e6fa531d555),
    (0x0aedce1e8301e6ef, 0x0b482d28ae825549),
    (0x0ada7b31ccb0b2f4, 0x0b357e3d8e31e749),
    (0x0ac7843a7981f8e3, 0x0b23192c63185ef2),
    (0x0ab4df9fe655b0fb, 0x0b10f64b579273f6),
    (0x0aa284bfe1cdea24, 0x0afe1d6859c11527),
    (0x0a906bd70b72892b, 0x0aeab8633790b1e2),
    (0x0a7d1bd6b173b9f2, 0x0ad7b25cc6523c3b),
    (0x0a69c9712232f548, 0x0ac5014bc06e7f91),
    (0x0a56d53d2be0a0b6, 0x0ab29c2c1dc958db),
    (0x0a4435229d0cc681, 0x0aa07ae5a7347d0b),
    (0x0a31e01427183001, 0x0a8d2c69c7599edc),
    (0x0a1f9be9e1d7b4e4, 0x0a79cf2c5625685e),
    (0x0a0bef014f36ffa9, 0x0a66d2655c8560eb),
    (0x09f8ac6ba86dcc3c, 0x0a542b9e90b536b6),
    (0x09e5c884857d8ade, 0x0a41d179e12ade6e),
    (0x09d338e29511ffcd, 0x0a2f772a9e0423a1),
    (0x09c0f43798c4f845, 0x0a1bc4e2f5a8c9af),
    (0x09ade466f9c32fda, 0x0a087eb54ae1860d),
    (0x099a56d48500b8a3, 0x09f598a7d65e3b67),
    (0x09873278f241bb95, 0x09e308090afcd9f3),
    (0x09746b841565ab3e, 0x09d0c34dc595f4bf),
    (0x0961f76e44abf0ec, 0x09bd83e5a3ffd7ad),
    (0x094f99abec00b682, 0x09a9f8c2eadfb109),
    (0x093bc6c19eee10e8, 0x0996d7ad6ac744f9),
    (0x0928673fad41c337, 0x0984149a31665d1e),
    (0x09156dece3f159c3, 0x0971a4d14ca40e60),
    (0x0902cf07ed3ac7ca, 0x095efd93aae49244),
    (0x08f0801f05da3bab, 0x094b341347ab9d2e),
    (0x08dcefd7b19fc691, 0x0937de10a24a9be3),
    (0x08c95c663259c5d8, 0x0924ee2a6bb63f1d),
    (0x08b6374ef6370a23, 0x091258802fee3a1b),
    (0x08a3739f6c74a992, 0x090012888bcf5e1b),
    (0x089105de86fb726e, 0x08ec25d7813e5a28),
    (0x087dc7c640bf856f, 0x08d8a2c46b36447d),
    (0x086a095d99893bea, 0x08c58d2d04dcdef9),
    (0x0856c0994513d45b, 0x08b2d8154e3020f5),
    (0x0843df6725a60cf5, 0x08a078003d294269),
    (0x08315957e82800c6, 0x088cc58a0676d26e),
    (0x081e46dfa81a2018, 0x08791ed1d851d1dd),
    (0x080a67f97b02e026, 0x0865ebfab91b4a2b),
    (0x07f704e120e656fd, 0x08531f0304f01ddb),
    (0x07e40e7ff18c854c, 0x0840ab8eaa8fae67),
    (0x07d1778970df4481, 0x082d0d6e2f89dd66),
    (0x07be688d1dc06742, 0x08194dc0e4e3bd62),
    (0x07aa74cd8f49285b, 0x080607271cb1c230),
    (0x079701ad03f5aba2, 0x07f32ab83cb1b9aa),
    (0x0783ff3437e5e592, 0x07e0ab555a059592),
    (0x07715f5a46f2a8c5, 0x07ccfae7d166a387),
    (0x075e2b951ac76b4b, 0x07b92ddcdd3a585a),
    (0x074a2f624fa2da41, 0x07a5ddb524f58124),
    (0x0736b71aaf8395ac, 0x0792fac7e1ac1a55),
    (0x0723b2124c85eb7d, 0x078077566199da13),
    (0x071111ab5ef7d9ce, 0x076c8ea38207b48c),
    (0x06fd922e485849df, 0x0758c04eb792831b),
    (0x06e99a3c2eb312df, 0x074571266fb205e7),
    (0x06d627dd610c1f2f, 0x073290ef7aa6784e),
    (0x06c329e3d8fc35e5, 0x072011744722e8f8),
    (0x06b09149eae599f4, 0x070bcc8c2b79e5e6),
    (0x069ca1dd59404578, 0x06f8090b25f1fb1c),
    (0x0688bab4cd7bc185, 0x06e4c563ff8738ed),
    (0x067559144638d7d2, 0x06d1f0fc4fe41aef),
    (0x06626b830bbc4f33, 0x06befaa9eeaa4992),
    (0x064fc588d5eeb300, 0x06aabb8ece685efe),
    (0x063b6320aea7077a, 0x06970e95e366ca95),
    (0x062798a96e59845b, 0x0683e0826243926d),
    (0x061451fcaaed5e70, 0x0671209163a43d8a),
    (0x06017d9121b4ff43, 0x065d805487b20ec2),
    (0x05ee184bec96bcc5, 0x064965317fc3f8eb),
    (0x05d9e0f0cdf83a76, 0x0635d99f4f4fa7a2),
    (0x05c63e056b37b486, 0x0622ca663e8f6c6e),
    (0x05b31b865207923b, 0x061026d30f31261e),
    (0x05a068145905badd, 0x05fbc0c903e2dd51),
    (0x058c293abfeb81c1, 0x05e7d5064d5d2e6a),
    (0x0578282015bfd093, 0x05d474846e880b80),
    (0x0564b6323fa7fafc, 0x05c18c50c637e437),
    (0x0551bfd2aff12d23, 0x05ae17fe4af1cdcd),
    (0x053e680a6315c8f9, 0x0599caab20737c4b),
    (0x052a082ea93d471f, 0x058618056ad2fa0d),
    (0x051646a66f6fb197, 0x0572eabb9557e4c3),
    (0x05030d7883df3e07, 0x0560305d4157bdec),
    (0x04f049a91d747c02, 0x054bb1f3a4ce848c),
    (0x04dbd5a7cbaf896d, 0x0537ad97206eb3e9),
    (0x04c7c5a693980a40, 0x05243bdb9112e65b),
    (0x04b44ae6c097e3b8, 0x051148391a9b5b70),
    (0x04a1505ddc5d82f8, 0x04fd81f35afd7fb2),
];

/// `(erf(r), scale(r))` for `r = i / 128` in `[0, 3.9375]`
pub(crate) static ERFF_TABLE: [(u32, u32); 505] = [
    (0x00000000, 0x3f906ebb),
    (0x3c106dfa, 0x3f906c79),
    (0x3c906bb8, 0x3f9065b4),
    (0x3cd89bf0, 0x3f905a6c),
    (0x3d1062b2, 0x3f904aa3),
    (0x3d3472ea, 0x3f90365a),
    (0x3d587d7f, 0x3f901d93),
    (0x3d7c8154, 0x3f900050),
    (0x3d903ea4, 0x3f8fde94),
    (0x3da2381f, 0x3f8fb862),
    (0x3db42c8d, 0x3f8f8dbd),
    (0x3dc61b5f, 0x3f8f5eab),
    (0x3dd80409, 0x3f8f2b2e),
    (0x3de9e5fc, 0x3f8ef34c),
    (0x3dfbc0ad, 0x3f8eb70a),
    (0x3e06c9c8, 0x3f8e766e),
    (0x3e0faf0d, 0x3f8e317d),
    (0x3e188fe1, 0x3f8de83e),
    (0x3e216bfe, 0x3f8d9ab9),
    (0x3e2a4321, 0x3f8d48f3),
    (0x3e331506, 0x3f8cf2f5),
    (0x3e3be169, 0x3f8c98c6),
    (0x3e44a808, 0x3f8c3a6f),
    (0x3e4d68a1, 0x3f8bd7f8),
    (0x3e5622f2, 0x3f8b716c),
    (0x3e5ed6b9, 0x3f8b06d2),
    (0x3e6783b7, 0x3f8a9834),
    (0x3e7029aa, 0x3f8a259e),
    (0x3e78c855, 0x3f89af18),
    (0x3e80afbc, 0x3f8934af),
    (0x3e84f76b, 0x3f88b66c),
    (0x3e893b19, 0x3f88345d),
    (0x3e8d7aa7, 0x3f87ae8b),
    (0x3e91b5f8, 0x3f872504),
    (0x3e95ecee, 0x3f8697d3),
    (0x3e9a1f6b, 0x3f860705),
    (0x3e9e4d54, 0x3f8572a8),
    (0x3ea2768c, 0x3f84dac8),
    (0x3ea69af8, 0x3f843f72),
    (0x3eaaba7a, 0x3f83a0b6),
    (0x3eaed4fa, 0x3f82fe9f),
    (0x3eb2ea5c, 0x3f82593e),
    (0x3eb6fa85, 0x3f81b0a0),
    (0x3ebb055d, 0x3f8104d3),
    (0x3ebf0aca, 0x3f8055e8),
    (0x3ec30ab3, 0x3f7f47d8),
    (0x3ec70501, 0x3f7ddddf),
    (0x3ecaf99b, 0x3f7c6e05),
    (0x3ecee869, 0x3f7af867),
    (0x3ed2d156, 0x3f797d26),
    (0x3ed6b44b, 0x3f77fc62),
    (0x3eda9132, 0x3f76763c),
    (0x3ede67f6, 0x3f74ead4),
    (0x3ee23882, 0x3f735a4c),
    (0x3ee602c2, 0x3f71c4c4),
    (0x3ee9c6a2, 0x3f702a5f),
    (0x3eed840e, 0x3f6e8b3e),
    (0x3ef13af5, 0x3f6ce783),
    (0x3ef4eb45, 0x3f6b3f51),
    (0x3ef894ea, 0x3f6992c9),
    (0x3efc37d5, 0x3f67e20f),
    (0x3effd3f5, 0x3f662d45),
    (0x3f01b49d, 0x3f64748e),
    (0x3f037bca, 0x3f62b80d),
    (0x3f053f7b, 0x3f60f7e5),
    (0x3f06ffa8, 0x3f5f3439),
    (0x3f08bc4a, 0x3f5d6d2d),
    (0x3f0a755a, 0x3f5ba2e3),
    (0x3f0c2ad3, 0x3f59d57e),
    (0x3f0ddcae, 0x3f580523),
    (0x3f0f8ae6, 0x3f5631f4),
    (0x3f113574, 0x3f545c14),
    (0x3f12dc54, 0x3f5283a7),
    (0x3f147f81, 0x3f50a8cf),
    (0x3f161ef6, 0x3f4ecbb1),
    (0x3f17baae, 0x3f4cec6d),
    (0x3f1952a6, 0x3f4b0b28),
    (0x3f1ae6da, 0x3f492804),
    (0x3f1c7745, 0x3f474323),
    (0x3f1e03e5, 0x3f455ca8),
    (0x3f1f8cb7, 0x3f4374b5),
    (0x3f2111b7, 0x3f418b6b),
    (0x3f2292e4, 0x3f3fa0ee),
    (0x3f24103a, 0x3f3db55e),
    (0x3f2589b9, 0x3f3bc8dc),
    (0x3f26ff5d, 0x3f39db8a),
    (0x3f287126, 0x3f37ed89),
    (0x3f29df13, 0x3f35fef8),
    (0x3f2b4922, 0x3f340ff9),
    (0x3f2caf53, 0x3f3220ab),
    (0x3f2e11a4, 0x3f30312e),
    (0x3f2f7017, 0x3f2e41a1),
    (0x3f30caab, 0x3f2c5223),
    (0x3f322160, 0x3f2a62d3),
    (0x3f337437, 0x3f2873cf),
    (0x3f34c32f, 0x3f268534),
    (0x3f360e4c, 0x3f249721),
    (0x3f37558c, 0x3f22a9b3),
    (0x3f3898f3, 0x3f20bd06),
    (0x3f39d881, 0x3f1ed137),
    (0x3f3b1438, 0x3f1ce661),
    (0x3f3c4c1b, 0x3f1afca0),
    (0x3f3d802c, 0x3f19140f),
    (0x3f3eb06c, 0x3f172cc9),
    (0x3f3fdce0, 0x3f1546e7),
    (0x3f410589, 0x3f136284),
    (0x3f422a6b, 0x3f117fb9),
    (0x3f434b89, 0x3f0f9e9e),
    (0x3f4468e7, 0x3f0dbf4c),
    (0x3f458287, 0x3f0be1db),
    (0x3f46986f, 0x3f0a0662),
    (0x3f47aaa2, 0x3f082cf7),
    (0x3f48b925, 0x3f0655b1),
    (0x3f49c3fb, 0x3f0480a6),
    (0x3f4acb29, 0x3f02adeb),
    (0x3f4bceb4, 0x3f00dd96),
    (0x3f4ccea1, 0x3efe1f73),
    (0x3f4dcaf4, 0x3efa88d5),
    (0x3f4ec3b4, 0x3ef6f777),
    (0x3f4fb8e5, 0x3ef36b80),
    (0x3f50aa8d, 0x3eefe513),
    (0x3f5198b1, 0x3eec6455),
    (0x3f528358, 0x3ee8e968),
    (0x3f536a86, 0x3ee5746d),
    (0x3f544e43, 0x3ee20584),
    (0x3f552e93, 0x3ede9ccc),
    (0x3f560b7e, 0x3edb3a64),
    (0x3f56e50a, 0x3ed7de6a),
    (0x3f57bb3d, 0x3ed488f8),
    (0x3f588e1e, 0x3ed13a2b),
    (0x3f595db4, 0x3ecdf21c),
    (0x3f5a2a05, 0x3ecab0e4),
    (0x3f5af318, 0x3ec7769b),
    (0x3f5bb8f4, 0x3ec44359),
    (0x3f5c7ba1, 0x3ec11733),
    (0x3f5d3b25, 0x3ebdf23d),
    (0x3f5df788, 0x3ebad48d),
    (0x3f5eb0d1, 0x3eb7be35),
    (0x3f5f6707, 0x3eb4af46),
    (0x3f601a32, 0x3eb1a7d3),
    (0x3f60ca59, 0x3eaea7ea),
    (0x3f617784, 0x3eabaf9a),
    (0x3f6221bb, 0x3ea8bef3),
    (0x3f62c905, 0x3ea5d600),
    (0x3f636d69, 0x3ea2f4ce),
    (0x3f640ef1, 0x3ea01b68),
    (0x3f64ada3, 0x3e9d49d9),
    (0x3f654987, 0x3e9a8029),
    (0x3f65e2a6, 0x3e97be62),
    (0x3f667906, 0x3e95048b),
    (0x3f670cb1, 0x3e9252aa),
    (0x3f679dae, 0x3e8fa8c5),
    (0x3f682c06, 0x3e8d06e3),
    (0x3f68b7bf, 0x3e8a6d05),
    (0x3f6940e2, 0x3e87db31),
    (0x3f69c778, 0x3e855168),
    (0x3f6a4b88, 0x3e82cfad),
    (0x3f6acd1a, 0x3e805600),
    (0x3f6b4c36, 0x3e7bc8c2),
    (0x3f6bc8e5, 0x3e76f5a0),
    (0x3f6c432f, 0x3e723298),
    (0x3f6cbb1b, 0x3e6d7fa5),
    (0x3f6d30b1, 0x3e68dcc1),
    (0x3f6da3fa, 0x3e6449e7),
    (0x3f6e14fe, 0x3e5fc70e),
    (0x3f6e83c4, 0x3e5b542b),
    (0x3f6ef055, 0x3e56f136),
    (0x3f6f5ab8, 0x3e529e21),
    (0x3f6fc2f5, 0x3e4e5adf),
    (0x3f702915, 0x3e4a2761),
    (0x3f708d1f, 0x3e460399),
    (0x3f70ef1b, 0x3e41ef75),
    (0x3f714f11, 0x3e3deae4),
    (0x3f71ad09, 0x3e39f5d2),
    (0x3f72090a, 0x3e36102b),
    (0x3f72631c, 0x3e3239db),
    (0x3f72bb46, 0x3e2e72cb),
    (0x3f731191, 0x3e2abae4),
    (0x3f736604, 0x3e27120f),
    (0x3f73b8a5, 0x3e237833),
    (0x3f74097e, 0x3e1fed36),
    (0x3f745895, 0x3e1c70fd),
    (0x3f74a5f2, 0x3e19036e),
    (0x3f74f19b, 0x3e15a46d),
    (0x3f753b98, 0x3e1253dc),
    (0x3f7583f1, 0x3e0f119f),
    (0x3f75caac, 0x3e0bdd96),
    (0x3f760fd1, 0x3e08b7a4),
    (0x3f765366, 0x3e059fa9),
    (0x3f769573, 0x3e029586),
    (0x3f76d5fe, 0x3dff3230),
    (0x3f77150f, 0x3df95481),
    (0x3f7752ab, 0x3df391b9),
    (0x3f778eda, 0x3dede995),
    (0x3f77c9a2, 0x3de85bd0),
    (0x3f78030a, 0x3de2e825),
    (0x3f783b18, 0x3ddd8e4c),
    (0x3f7871d3, 0x3dd84dfe),
    (0x3f78a741, 0x3dd326f3),
    (0x3f78db68, 0x3dce18e3),
    (0x3f790e50, 0x3dc92385),
    (0x3f793ffc, 0x3dc4468f),
    (0x3f797075, 0x3dbf81b6),
    (0x3f799fbf, 0x3dbad4b0),
    (0x3f79cde1, 0x3db63f32),
    (0x3f79fae1, 0x3db1c0f1),
    (0x3f7a26c4, 0x3dad59a1),
    (0x3f7a518f, 0x3da908f6),
    (0x3f7a7b4a, 0x3da4cea4),
    (0x3f7aa3f9, 0x3da0aa5e),
    (0x3f7acba1, 0x3d9c9bd9),
    (0x3f7af248, 0x3d98a2c7),
    (0x3f7b17f4, 0x3d94bedd),
    (0x3f7b3ca9, 0x3d90efcd),
    (0x3f7b606e, 0x3d8d354b),
    (0x3f7b8346, 0x3d898f0a),
    (0x3f7ba537, 0x3d85fcbf),
    (0x3f7bc646, 0x3d827e1d),
    (0x3f7be677, 0x3d7e25af),
    (0x3f7c05d1, 0x3d777546),
    (0x3f7c2456, 0x3d70ea68),
    (0x3f7c420d, 0x3d6a847d),
    (0x3f7c5ef9, 0x3d6442f0),
    (0x3f7c7b1f, 0x3d5e252a),
    (0x3f7c9684, 0x3d582a98),
    (0x3f7cb12b, 0x3d5252a5),
    (0x3f7ccb1a, 0x3d4c9cbd),
    (0x3f7ce454, 0x3d47084e),
    (0x3f7cfcdd, 0x3d4194c7),
    (0x3f7d14ba, 0x3d3c4196),
    (0x3f7d2bef, 0x3d370e2c),
    (0x3f7d427f, 0x3d31f9fb),
    (0x3f7d586f, 0x3d2d0474),
    (0x3f7d6dc2, 0x3d282d0c),
    (0x3f7d827b, 0x3d237336),
    (0x3f7d96a0, 0x3d1ed669),
    (0x3f7daa32, 0x3d1a561b),
    (0x3f7dbd36, 0x3d15f1c6),
    (0x3f7dcfb0, 0x3d11a8e1),
    (0x3f7de1a2, 0x3d0d7ae9),
    (0x3f7df30f, 0x3d09675a),
    (0x3f7e03fd, 0x3d056db0),
    (0x3f7e146c, 0x3d018d6b),
    (0x3f7e2461, 0x3cfb8c15),
    (0x3f7e33de, 0x3cf42e22),
    (0x3f7e42e8, 0x3ced0003),
    (0x3f7e517f, 0x3ce600c0),
    (0x3f7e5fa9, 0x3cdf2f67),
    (0x3f7e6d66, 0x3cd88b05),
    (0x3f7e7abb, 0x3cd212ad),
    (0x3f7e87aa, 0x3ccbc574),
    (0x3f7e9435, 0x3cc5a273),
    (0x3f7ea05f, 0x3cbfa8c4),
    (0x3f7eac2b, 0x3cb9d786),
    (0x3f7eb79a, 0x3cb42ddb),
    (0x3f7ec2b1, 0x3caeaae6),
    (0x3f7ecd71, 0x3ca94dcf),
    (0x3f7ed7dc, 0x3ca415c2),
    (0x3f7ee1f4, 0x3c9f01ec),
    (0x3f7eebbd, 0x3c9a117f),
    (0x3f7ef537, 0x3c9543ae),
    (0x3f7efe66, 0x3c9097b1),
    (0x3f7f074b, 0x3c8c0cc2),
    (0x3f7f0fe8, 0x3c87a21f),
    (0x3f7f1840, 0x3c83570a),
    (0x3f7f2053, 0x3c7e558a),
    (0x3f7f2826, 0x3c763931),
    (0x3f7f2fb8, 0x3c6e579b),
    (0x3f7f370c, 0x3c66af65),
    (0x3f7f3e23, 0x3c5f3f2d),
    (0x3f7f4500, 0x3c58059c),
    (0x3f7f4ba4, 0x3c51015f),
    (0x3f7f5211, 0x3c4a3127),
    (0x3f7f5848, 0x3c4393af),
    (0x3f7f5e4b, 0x3c3d27b5),
    (0x3f7f641b, 0x3c36ebff),
    (0x3f7f69ba, 0x3c30df57),
    (0x3f7f6f29, 0x3c2b008e),
    (0x3f7f746a, 0x3c254e7b),
    (0x3f7f797f, 0x3c1fc7fb),
    (0x3f7f7e67, 0x3c1a6bee),
    (0x3f7f8326, 0x3c15393d),
    (0x3f7f87bb, 0x3c102ed6),
    (0x3f7f8c29, 0x3c0b4bab),
    (0x3f7f9070, 0x3c068eb5),
    (0x3f7f9492, 0x3c01f6f1),
    (0x3f7f9890, 0x3bfb06c5),
    (0x3f7f9c6b, 0x3bf26625),
    (0x3f7fa024, 0x3bea0a1d),
    (0x3f7fa3bc, 0x3be1f0d3),
    (0x3f7fa734, 0x3bda1876),
    (0x3f7faa8d, 0x3bd27f42),
    (0x3f7fadc8, 0x3bcb237a),
    (0x3f7fb0e6, 0x3bc4036c),
    (0x3f7fb3e8, 0x3bbd1d6f),
    (0x3f7fb6cf, 0x3bb66fe6),
    (0x3f7fb99c, 0x3baff93b),
    (0x3f7fbc4f, 0x3ba9b7e1),
    (0x3f7fbeea, 0x3ba3aa56),
    (0x3f7fc16d, 0x3b9dcf20),
    (0x3f7fc3d9, 0x3b9824ce),
    (0x3f7fc62e, 0x3b92a9f7),
    (0x3f7fc86e, 0x3b8d5d3c),
    (0x3f7fca99, 0x3b883d46),
    (0x3f7fccb0, 0x3b8348c6),
    (0x3f7fceb4, 0x3b7cfce8),
    (0x3f7fd0a5, 0x3b73ba24),
    (0x3f7fd283, 0x3b6ac6d3),
    (0x3f7fd450, 0x3b622096),
    (0x3f7fd60c, 0x3b59c51d),
    (0x3f7fd7b7, 0x3b51b22a),
    (0x3f7fd953, 0x3b49e589),
    (0x3f7fdadf, 0x3b425d18),
    (0x3f7fdc5c, 0x3b3b16c2),
    (0x3f7fddcc, 0x3b341080),
    (0x3f7fdf2d, 0x3b2d4858),
    (0x3f7fe081, 0x3b26bc5e),
    (0x3f7fe1c8, 0x3b206ab2),
    (0x3f7fe303, 0x3b1a5183),
    (0x3f7fe431, 0x3b146f09),
    (0x3f7fe554, 0x3b0ec18c),
    (0x3f7fe66c, 0x3b09475d),
    (0x3f7fe77a, 0x3b03feda),
    (0x3f7fe87d, 0x3afdccdc),
    (0x3f7fe975, 0x3af3f919),
    (0x3f7fea65, 0x3aea7f6c),
    (0x3f7feb4b, 0x3ae15ce8),
    (0x3f7fec27, 0x3ad88eb8),
    (0x3f7fecfc, 0x3ad0121b),
    (0x3f7fedc8, 0x3ac7e464),
    (0x3f7fee8c, 0x3ac002f8),
    (0x3f7fef48, 0x3ab86b52),
    (0x3f7feffd, 0x3ab11afe),
    (0x3f7ff0aa, 0x3aaa0f9a),
    (0x3f7ff151, 0x3aa346d7),
    (0x3f7ff1f1, 0x3a9cbe77),
    (0x3f7ff28a, 0x3a96744c),
    (0x3f7ff31e, 0x3a90663b),
    (0x3f7ff3ab, 0x3a8a9237),
    (0x3f7ff433, 0x3a84f643),
    (0x3f7ff4b5, 0x3a7f20e7),
    (0x3f7ff532, 0x3a74bdd2),
    (0x3f7ff5aa, 0x3a6abfa9),
    (0x3f7ff61d, 0x3a6122ea),
    (0x3f7ff68b, 0x3a57e42f),
    (0x3f7ff6f5, 0x3a4f002c),
    (0x3f7ff75a, 0x3a4673af),
    (0x3f7ff7bb, 0x3a3e3ba2),
    (0x3f7ff819, 0x3a365507),
    (0x3f7ff872, 0x3a2ebcf6),
    (0x3f7ff8c7, 0x3a2770a1),
    (0x3f7ff919, 0x3a206d52),
    (0x3f7ff968, 0x3a19b066),
    (0x3f7ff9b3, 0x3a133754),
    (0x3f7ff9fb, 0x3a0cffa3),
    (0x3f7ffa40, 0x3a0706f4),
    (0x3f7ffa82, 0x3a014af8),
    (0x3f7ffac1, 0x39f792ea),
    (0x3f7ffafe, 0x39ed0088),
    (0x3f7ffb38, 0x39e2daa1),
    (0x3f7ffb6f, 0x39d91d2d),
    (0x3f7ffba5, 0x39cfc44a),
    (0x3f7ffbd7, 0x39c6cc35),
    (0x3f7ffc08, 0x39be314d),
    (0x3f7ffc36, 0x39b5f011),
    (0x3f7ffc63, 0x39ae051c),
    (0x3f7ffc8e, 0x39a66d2a),
    (0x3f7ffcb6, 0x399f2512),
    (0x3f7ffcdd, 0x399829c8),
    (0x3f7ffd02, 0x3991785a),
    (0x3f7ffd26, 0x398b0df2),
    (0x3f7ffd48, 0x3984e7d2),
    (0x3f7ffd68, 0x397e06ab),
    (0x3f7ffd87, 0x3972bbde),
    (0x3f7ffda5, 0x3967ea53),
    (0x3f7ffdc1, 0x395d8d4b),
    (0x3f7ffddc, 0x3953a034),
    (0x3f7ffdf6, 0x394a1ea5),
    (0x3f7ffe0f, 0x3941045e),
    (0x3f7ffe27, 0x39384d47),
    (0x3f7ffe3d, 0x392ff56d),
    (0x3f7ffe53, 0x3927f904),
    (0x3f7ffe67, 0x39205461),
    (0x3f7ffe7b, 0x391903fe),
    (0x3f7ffe8d, 0x39120475),
    (0x3f7ffe9f, 0x390b5281),
    (0x3f7ffeb0, 0x3904eafc),
    (0x3f7ffec0, 0x38fd95bd),
    (0x3f7ffed0, 0x38f1de7a),
    (0x3f7ffedf, 0x38e6aa94),
    (0x3f7ffeed, 0x38dbf4a3),
    (0x3f7ffefa, 0x38d1b776),
    (0x3f7fff07, 0x38c7ee0e),
    (0x3f7fff13, 0x38be939c),
    (0x3f7fff1f, 0x38b5a381),
    (0x3f7fff2a, 0x38ad194e),
    (0x3f7fff34, 0x38a4f0bc),
    (0x3f7fff3f, 0x389d25b0),
    (0x3f7fff48, 0x3895b43b),
    (0x3f7fff51, 0x388e9890),
    (0x3f7fff5a, 0x3887cf0e),
    (0x3f7fff62, 0x38815434),
    (0x3f7fff6a, 0x3876494d),
    (0x3f7fff72, 0x386a7a5a),
    (0x3f7fff79, 0x385f355e),
    (0x3f7fff80, 0x38547466),
    (0x3f7fff86, 0x384a31bf),
    (0x3f7fff8c, 0x384067ee),
    (0x3f7fff92, 0x383711b4),
    (0x3f7fff98, 0x382e2a06),
    (0x3f7fff9d, 0x3825ac0e),
    (0x3f7fffa2, 0x381d9329),
    (0x3f7fffa7, 0x3815dae6),
    (0x3f7fffab, 0x380e7f01),
    (0x3f7fffb0, 0x38077b62),
    (0x3f7fffb4, 0x3800cc21),
    (0x3f7fffb8, 0x37f4daf4),
    (0x3f7fffbc, 0x37e8b7ac),
    (0x3f7fffbf, 0x37dd2782),
    (0x3f7fffc2, 0x37d223dc),
    (0x3f7fffc6, 0x37c7a666),
    (0x3f7fffc9, 0x37bda912),
    (0x3f7fffcc, 0x37b42611),
    (0x3f7fffce, 0x37ab17d6),
    (0x3f7fffd1, 0x37a2790f),
    (0x3f7fffd3, 0x379a44a5),
    (0x3f7fffd6, 0x379275b9),
    (0x3f7fffd8, 0x378b07a2),
    (0x3f7fffda, 0x3783f5e9),
    (0x3f7fffdc, 0x377a7897),
    (0x3f7fffde, 0x376dad68),
    (0x3f7fffe0, 0x37618278),
    (0x3f7fffe2, 0x3755f04f),
    (0x3f7fffe3, 0x374aefcc),
    (0x3f7fffe5, 0x37407a1d),
    (0x3f7fffe6, 0x373688bc),
    (0x3f7fffe8, 0x372d1570),
    (0x3f7fffe9, 0x37241a44),
    (0x3f7fffea, 0x371b9188),
    (0x3f7fffeb, 0x371375cf),
    (0x3f7fffec, 0x370bc1e7),
    (0x3f7fffee, 0x370470dd),
    (0x3f7fffef, 0x36fafbec),
    (0x3f7fffef, 0x36edc95b),
    (0x3f7ffff0, 0x36e14167),
    (0x3f7ffff1, 0x36d55bd6),
    (0x3f7ffff2, 0x36ca10ce),
    (0x3f7ffff3, 0x36bf58d1),
    (0x3f7ffff4, 0x36b52cb9),
    (0x3f7ffff4, 0x36ab85b5),
    (0x3f7ffff5, 0x36a25d43),
    (0x3f7ffff5, 0x3699ad31),
    (0x3f7ffff6, 0x36916f95),
    (0x3f7ffff7, 0x36899ecb),
    (0x3f7ffff7, 0x36823575),
    (0x3f7ffff8, 0x36765ce8),
    (0x3f7ffff8, 0x366909cc),
    (0x3f7ffff9, 0x365c684a),
    (0x3f7ffff9, 0x36506f88),
    (0x3f7ffff9, 0x36451713),
    (0x3f7ffffa, 0x363a56e4),
    (0x3f7ffffa, 0x36302754),
    (0x3f7ffffa, 0x36268119),
    (0x3f7ffffb, 0x361d5d43),
    (0x3f7ffffb, 0x3614b538),
    (0x3f7ffffb, 0x360c82b1),
    (0x3f7ffffc, 0x3604bfb1),
    (0x3f7ffffc, 0x35facd10),
    (0x3f7ffffc, 0x35ece39b),
    (0x3f7ffffc, 0x35dfb8b6),
    (0x3f7ffffd, 0x35d34296),
    (0x3f7ffffd, 0x35c777ec),
    (0x3f7ffffd, 0x35bc4fdc),
    (0x3f7ffffd, 0x35b1c1fc),
    (0x3f7ffffd, 0x35a7c64b),
    (0x3f7ffffd, 0x359e5531),
    (0x3f7ffffe, 0x35956771),
    (0x3f7ffffe, 0x358cf630),
    (0x3f7ffffe, 0x3584fae8),
    (0x3f7ffffe, 0x357adecb),
    (0x3f7ffffe, 0x356c9b8f),
    (0x3f7ffffe, 0x355f20ef),
    (0x3f7ffffe, 0x3552644f),
    (0x3f7ffffe, 0x35465b9c),
    (0x3f7fffff, 0x353afd47),
    (0x3f7fffff, 0x3530403c),
    (0x3f7fffff, 0x35261be0),
    (0x3f7fffff, 0x351c8807),
    (0x3f7fffff, 0x35137cf0),
    (0x3f7fffff, 0x350af341),
    (0x3f7fffff, 0x3502e402),
    (0x3f7fffff, 0x34f6912a),
    (0x3f7fffff, 0x34e8356b),
    (0x3f7fffff, 0x34daa8e4),
    (0x3f7fffff, 0x34cde050),
    (0x3f7fffff, 0x34c1d100),
    (0x3f7fffff, 0x34b670d5),
    (0x3f7fffff, 0x34abb639),
    (0x3f7fffff, 0x34a19816),
    (0x3f7fffff, 0x34980dd1),
    (0x3f7fffff, 0x348f0f43),
    (0x3f7fffff, 0x348694b3),
    (0x3f800000, 0x347d2da8),
    (0x3f800000, 0x346e1d72),
    (0x3f800000, 0x345febab),
];

/// `(erfc(r), scale(r))` scaled by `2^47` for `r = i / 64` in `[0, 10.0625]`
pub(crate) static ERFCF_TABLE: [(u32, u32); 645] = [
    (0x57000000, 0x57106ebb),
    (0x56fb7ca2, 0x571065b4),
    (0x56f6f9d5, 0x57104aa3),
    (0x56f27828, 0x57101d93),
    (0x56edf82b, 0x570fde94),
    (0x56e97a6e, 0x570f8dbd),
    (0x56e4ff7f, 0x570f2b2e),
    (0x56e087ea, 0x570eb70a),
    (0x56dc143d, 0x570e317d),
    (0x56d7a500, 0x570d9ab9),
    (0x56d33abf, 0x570cf2f5),
    (0x56ced5fe, 0x570c3a6f),
    (0x56ca7744, 0x570b716c),
    (0x56c61f12, 0x570a9834),
    (0x56c1cdeb, 0x5709af18),
    (0x56bd844a, 0x5708b66c),
    (0x56b942ac, 0x5707ae8b),
    (0x56b50989, 0x570697d3),
    (0x56b0d956, 0x570572a8),
    (0x56acb284, 0x57043f72),
    (0x56a89583, 0x5702fe9f),
    (0x56a482bd, 0x5701b0a0),
    (0x56a07a9b, 0x570055e8),
    (0x569c7d80, 0x56fddddf),
    (0x56988bcb, 0x56faf867),
    (0x5694a5da, 0x56f7fc62),
    (0x5690cc05, 0x56f4ead4),
    (0x568cfe9f, 0x56f1c4c4),
    (0x56893df9, 0x56ee8b3e),
    (0x56858a5e, 0x56eb3f51),
    (0x5681e415, 0x56e7e20f),
    (0x567c96c6, 0x56e4748e),
    (0x5675810a, 0x56e0f7e5),
    (0x566e876d, 0x56dd6d2d),
    (0x5667aa5a, 0x56d9d57e),
    (0x5660ea35, 0x56d631f4),
    (0x565a4757, 0x56d283a7),
    (0x5653c214, 0x56cecbb1),
    (0x564d5ab3, 0x56cb0b28),
    (0x56471175, 0x56c74323),
    (0x5640e692, 0x56c374b5),
    (0x563ada38, 0x56bfa0ee),
    (0x5634ec8f, 0x56bbc8dc),
    (0x562f1db3, 0x56b7ed89),
    (0x56296dbc, 0x56b40ff9),
    (0x5623dcb7, 0x56b0312e),
    (0x561e6aaa, 0x56ac5223),
    (0x56191793, 0x56a873cf),
    (0x5613e369, 0x56a49721),
    (0x560ece1a, 0x56a0bd06),
    (0x5609d78f, 0x569ce661),
    (0x5604ffa8, 0x5699140f),
    (0x56004640, 0x569546e7),
    (0x55f75654, 0x56917fb9),
    (0x55ee5c65, 0x568dbf4c),
    (0x55e59e43, 0x568a0662),
    (0x55dd1b6d, 0x568655b1),
    (0x55d4d35d, 0x5682adeb),
    (0x55ccc57d, 0x567e1f73),
    (0x55c4f12f, 0x5676f777),
    (0x55bd55cc, 0x566fe513),
    (0x55b5f2a1, 0x5668e968),
    (0x55aec6f6, 0x56620584),
    (0x55a7d207, 0x565b3a64),
    (0x55a1130b, 0x565488f8),
    (0x559a8931, 0x564df21c),
    (0x559433a0, 0x5647769b),
    (0x558e117c, 0x56411733),
    (0x558821e1, 0x563ad48d),
    (0x558263e5, 0x5634af46),
    (0x5579ad39, 0x562ea7ea),
    (0x556ef22b, 0x5628bef3),
    (0x556494b6, 0x5622f4ce),
    (0x555a92eb, 0x561d49d9),
    (0x5550ead3, 0x5617be62),
    (0x55479a75, 0x561252aa),
    (0x553e9fd3, 0x560d06e3),
    (0x5535f8ee, 0x5607db31),
    (0x552da3c2, 0x5602cfad),
    (0x55259e4c, 0x55fbc8c2),
    (0x551de68a, 0x55f23298),
    (0x55167a77, 0x55e8dcc1),
    (0x550f5812, 0x55dfc70e),
    (0x55087d5c, 0x55d6f136),
    (0x5501e856, 0x55ce5adf),
    (0x54f72e0c, 0x55c60399),
    (0x54eb0eeb, 0x55bdeae4),
    (0x54df6f64, 0x55b6102b),
    (0x54d44b9e, 0x55ae72cb),
    (0x54c99fc8, 0x55a7120f),
    (0x54bf681d, 0x559fed36),
    (0x54b5a0e6, 0x5599036e),
    (0x54ac4679, 0x559253dc),
    (0x54a35539, 0x558bdd96),
    (0x549ac999, 0x55859fa9),
    (0x5492a01c, 0x557f3230),
    (0x548ad554, 0x557391b9),
    (0x548365e5, 0x55685bd0),
    (0x54789d02, 0x555d8e4c),
    (0x546b17df, 0x555326f3),
    (0x545e360f, 0x55492385),
    (0x5451f166, 0x553f81b6),
    (0x544643dc, 0x55363f32),
    (0x543b2790, 0x552d59a1),
    (0x543096c5, 0x5524cea4),
    (0x54268be5, 0x551c9bd9),
    (0x541d0180, 0x5514bedd),
    (0x5413f24c, 0x550d354b),
    (0x540b5926, 0x5505fcbf),
    (0x54033111, 0x54fe25af),
    (0x53f6ea69, 0x54f0ea68),
    (0x53e841c1, 0x54e442f0),
    (0x53da5f10, 0x54d82a98),
    (0x53cd398b, 0x54cc9cbd),
    (0x53c0c8ae, 0x54c194c7),
    (0x53b50440, 0x54b70e2c),
    (0x53a9e44f, 0x54ad0474),
    (0x539f612f, 0x54a37336),
    (0x5395737d, 0x549a561b),
    (0x538c1417, 0x5491a8e1),
    (0x53833c22, 0x5489675a),
    (0x5375ca07, 0x54818d6b),
    (0x536610c3, 0x54742e22),
    (0x53574046, 0x546600c0),
    (0x53494cd8, 0x54588b05),
    (0x533c2b3a, 0x544bc574),
    (0x532fd0a5, 0x543fa8c4),
    (0x532432c3, 0x54342ddb),
    (0x531947af, 0x54294dcf),
    (0x530f05f3, 0x541f01ec),
    (0x5305647e, 0x541543ae),
    (0x52f8b557, 0x540c0cc2),
    (0x52e7c06a, 0x5403570a),
    (0x52d7da71, 0x53f63931),
    (0x52c8f45f, 0x53e6af65),
    (0x52baffda, 0x53d8059c),
    (0x52adef39, 0x53ca3127),
    (0x52a1b57a, 0x53bd27b5),
    (0x5296463d, 0x53b0df57),
    (0x528b95bd, 0x53a54e7b),
    (0x528198cc, 0x539a6bee),
    (0x52708999, 0x53902ed6),
    (0x525f1f58, 0x53868eb5),
    (0x524edfb9, 0x537b06c5),
    (0x523fb8a0, 0x536a0a1d),
    (0x523198e5, 0x535a1876),
    (0x5224704e, 0x534b237a),
    (0x52182f7c, 0x533d1d6f),
    (0x520cc7eb, 0x532ff93b),
    (0x52022be3, 0x5323aa56),
    (0x51f09cde, 0x531824ce),
    (0x51de46a9, 0x530d5d3c),
    (0x51cd3e18, 0x530348c6),
    (0x51bd6d6f, 0x52f3ba24),
    (0x51aec035, 0x52e22096),
    (0x51a12321, 0x52d1b22a),
    (0x51948413, 0x52c25d18),
    (0x5188d1fc, 0x52b41080),
    (0x517bf9ac, 0x52a6bc5e),
    (0x5167eb29, 0x529a5183),
    (0x51555c2d, 0x528ec18c),
    (0x51443238, 0x5283feda),
    (0x51345472, 0x5273f919),
    (0x5125ab93, 0x52615ce8),
    (0x511821ce, 0x5250121b),
    (0x510ba2bc, 0x524002f8),
    (0x51001b49, 0x52311afe),
    (0x50eaf33c, 0x522346d7),
    (0x50d75a21, 0x5216744c),
    (0x50c54c24, 0x520a9237),
    (0x50b4ac3b, 0x51ff20e7),
    (0x50a55f51, 0x51eabfa9),
    (0x50974c27, 0x51d7e42f),
    (0x508a5b3b, 0x51c673af),
    (0x507ced50, 0x51b65507),
    (0x5067141d, 0x51a770a1),
    (0x505304fc, 0x5199b066),
    (0x50409cb5, 0x518cffa3),
    (0x502fba92, 0x51814af8),
    (0x50204037, 0x516d0088),
    (0x50121177, 0x51591d2d),
    (0x50051430, 0x5146cc35),
    (0x4ff26058, 0x5135f011),
    (0x4fdc9dfa, 0x51266d2a),
    (0x4fc8b7be, 0x511829c8),
    (0x4fb68738, 0x510b0df2),
    (0x4fa5e8e0, 0x50fe06ab),
    (0x4f96bbdf, 0x50e7ea53),
    (0x4f88e1df, 0x50d3a034),
    (0x4f787dc3, 0x50c1045e),
    (0x4f61721f, 0x50aff56d),
    (0x4f4c712a, 0x50a05461),
    (0x4f394efb, 0x50920475),
    (0x4f27e31e, 0x5084eafc),
    (0x4f180855, 0x5071de7a),
    (0x4f099c5c, 0x505bf4a3),
    (0x4ef8ff60, 0x5047ee0e),
    (0x4ee12ab5, 0x5035a381),
    (0x4ecb8583, 0x5024f0bc),
    (0x4eb7deef, 0x5015b43b),
    (0x4ea60a27, 0x5007cf0e),
    (0x4e95de0f, 0x4ff6494d),
    (0x4e8734f9, 0x4fdf355e),
    (0x4e73d8c4, 0x4fca31bf),
    (0x4e5bc95e, 0x4fb711b4),
    (0x4e4601e9, 0x4fa5ac0e),
    (0x4e324d81, 0x4f95dae6),
    (0x4e207bca, 0x4f877b62),
    (0x4e106098, 0x4f74daf4),
    (0x4e01d395, 0x4f5d2782),
    (0x4de95fe3, 0x4f47a666),
    (0x4dd1a834, 0x4f342611),
    (0x4dbc42e7, 0x4f22790f),
    (0x4da8f835, 0x4f1275b9),
    (0x4d979555, 0x4f03f5e9),
    (0x4d87ec0b, 0x4eedad68),
    (0x4d73a498, 0x4ed5f04f),
    (0x4d5a43ba, 0x4ec07a1d),
    (0x4d437003, 0x4ead1570),
    (0x4d2eea58, 0x4e9b9188),
    (0x4d1c7974, 0x4e8bc1e7),
    (0x4d0be963, 0x4e7afbec),
    (0x4cfa160c, 0x4e614167),
    (0x4cdf6759, 0x4e4a10ce),
    (0x4cc77955, 0x4e352cb9),
    (0x4cb205fb, 0x4e225d43),
    (0x4c9ecdf3, 0x4e116f95),
    (0x4c8d97f2, 0x4e023575),
    (0x4c7c6061, 0x4de909cc),
    (0x4c60cfd4, 0x4dd06f88),
    (0x4c4829c6, 0x4dba56e4),
    (0x4c3221ff, 0x4da68119),
    (0x4c1e73c2, 0x4d94b538),
    (0x4c0ce119, 0x4d84bfb1),
    (0x4bfa6462, 0x4d6ce39b),
    (0x4bde6987, 0x4d534296),
    (0x4bc57726, 0x4d3c4fdc),
    (0x4baf3bdb, 0x4d27c64b),
    (0x4b9b6e79, 0x4d156771),
    (0x4b89cd3e, 0x4d04fae8),
    (0x4b743a38, 0x4cec9b8f),
    (0x4b585225, 0x4cd2644f),
    (0x4b3f8325, 0x4cbafd47),
    (0x4b2977f0, 0x4ca61be0),
    (0x4b15e415, 0x4c937cf0),
    (0x4b048320, 0x4c82e402),
    (0x4aea2f8b, 0x4c68356b),
    (0x4aced659, 0x4c4de050),
    (0x4ab69893, 0x4c3670d5),
    (0x4aa11e8a, 0x4c219816),
    (0x4a8e19e7, 0x4c0f0f43),
    (0x4a7a896f, 0x4bfd2da8),
    (0x4a5cc11e, 0x4bdfebab),
    (0x4a426b7f, 0x4bc5f27c),
    (0x4a2b2549, 0x4baee6b3),
    (0x4a169605, 0x4b9a767c),
    (0x4a046ee9, 0x4b8858a4),
    (0x49e8d3a8, 0x4b709770),
    (0x49cc90c6, 0x4b542a75),
    (0x49b3a635, 0x4b3b01dd),
    (0x499db15b, 0x4b24c066),
    (0x498a5aa0, 0x4b1112d9),
    (0x4972a881, 0x4aff5e08),
    (0x4954b277, 0x4ae0a591),
    (0x493a58bd, 0x4ac5867e),
    (0x49232ed5, 0x4aad97f3),
    (0x490ed4a2, 0x4a987c9e),
    (0x48f9ea08, 0x4a85e186),
    (0x48da8951, 0x4a6af9d4),
    (0x48bf01d9, 0x4a4e1a8c),
    (0x48a6ddcc, 0x4a34b0dc),
    (0x4891b50d, 0x4a1e558a),
    (0x487e574a, 0x4a0aad05),
    (0x485de0d0, 0x49f2cc48),
    (0x4841776e, 0x49d47203),
    (0x48289cd3, 0x49b9cbe3),
    (0x4812e1aa, 0x49a26937),
    (0x47ffc7c2, 0x498de652),
    (0x47de9a3a, 0x4977d629),
    (0x47c1a2c3, 0x49585345),
    (0x47a85bae, 0x493cba74),
    (0x47924f79, 0x49249254),
    (0x477e2dc4, 0x490f6fd2),
    (0x475cae77, 0x48f9e90c),
    (0x473f81dd, 0x48d99a7d),
    (0x47261c4e, 0x48bd616c),
    (0x47100357, 0x48a4bcd6),
    (0x46f99750, 0x488f3b3e),
    (0x46d82e7f, 0x4878f1a9),
    (0x46bb27a3, 0x48583bc6),
    (0x46a1f2b6, 0x483bbab7),
    (0x468c11c0, 0x4822e733),
    (0x46722d4c, 0x480d4a80),
    (0x46514266, 0x47f4f900),
    (0x4634bacb, 0x47d443df),
    (0x461c03d6, 0x47b7d5b2),
    (0x46069d9b, 0x479f2272),
    (0x45e83120, 0x4789af94),
    (0x45c82706, 0x476e23cf),
    (0x45ac7395, 0x474dd76a),
    (0x45948366, 0x4731d636),
    (0x457fac6d, 0x4719912d),
    (0x455bf8fa, 0x47048b78),
    (0x453d2a88, 0x46e4b060),
    (0x452298a1, 0x46c530ba),
    (0x450bb0fc, 0x46a9f27c),
    (0x44efe94b, 0x46926579),
    (0x44cdeaf8, 0x467c1860),
    (0x44b0a808, 0x4658f2d6),
    (0x44977b00, 0x463a9c63),
    (0x4481d48c, 0x46206fec),
    (0x445e7135, 0x4609de04),
    (0x443e77a1, 0x45ecd440),
    (0x442302b0, 0x45cb505a),
    (0x440b71e5, 0x45ae74d6),
    (0x43ee7534, 0x45959f2a),
    (0x43cbca2d, 0x45804280),
    (0x43ae1414, 0x455bc9bf),
    (0x4394a0a8, 0x453c396d),
    (0x437dac7d, 0x45211d60),
    (0x435860d4, 0x4509d7a8),
    (0x43387a3a, 0x44ebbf86),
    (0x431d3454, 0x44c97f9a),
    (0x4305e630, 0x44ac23f7),
    (0x42e3fd06, 0x4492fcf7),
    (0x42c200db, 0x447ae63c),
    (0x42a5014d, 0x445607b0),
    (0x428c4623, 0x44367d4e),
    (0x426e627d, 0x441b855c),
    (0x424a7603, 0x44047920),
    (0x422bde4b, 0x43e19261),
    (0x4211d40d, 0x43bff482),
    (0x41f7593c, 0x43a344bf),
    (0x41d1abca, 0x438acd1c),
    (0x41b1a5c0, 0x436be2ca),
    (0x41967152, 0x43485727),
    (0x417eaf84, 0x432a1178),
    (0x415779e7, 0x43104cc0),
    (0x41363731, 0x42f4c081),
    (0x411a03db, 0x42cf7703),
    (0x41021dd0, 0x42afc5c4),
    (0x40dbbf2e, 0x4294d94a),
    (0x40b97862, 0x427bf99c),
    (0x409c770c, 0x42552bb9),
    (0x4083eeb4, 0x4234411f),
    (0x405e62c7, 0x421858a7),
    (0x403b5652, 0x4200b23e),
    (0x401dbc89, 0x41d9543f),
    (0x4004bfc1, 0x41b76979),
    (0x3fdf551f, 0x419ab66b),
    (0x3fbbc5f1, 0x418270af),
    (0x3f9dccc2, 0x415bd820),
    (0x3f848c16, 0x41392c31),
    (0x3f5e907e, 0x411be496),
    (0x3f3ac490, 0x41032dcb),
    (0x3f1ca73d, 0x40dca86a),
    (0x3f0354cb, 0x40b97eca),
    (0x3edc1947, 0x409bdc1e),
    (0x3eb857fa, 0x4082e528),
    (0x3e9a529e, 0x405bc03f),
    (0x3e8120ef, 0x40385f58),
    (0x3e57fdc8, 0x401a9d36),
    (0x3e348e3e, 0x40019878),
    (0x3e16dc65, 0x3fd9250b),
    (0x3dfbfa7c, 0x3fb5d48d),
    (0x3dd255b2, 0x3f982f4c),
    (0x3daf7d27, 0x3f7e9ef1),
    (0x3d92586c, 0x3f54e64a),
    (0x3d73f750, 0x3f31ed7c),
    (0x3d4b4137, 0x3f14a0bb),
    (0x3d294169, 0x3ef82f41),
    (0x3d0ce028, 0x3ecf1cee),
    (0x3cea654e, 0x3eacc100),
    (0x3cc2e7d6, 0x3e900645),
    (0x3ca1fd99, 0x3e700749),
    (0x3c8691c1, 0x3e47ea70),
    (0x3c5f78d9, 0x3e266ce0),
    (0x3c3976f2, 0x3e0a7a45),
    (0x3c19d8e5, 0x3de65575),
    (0x3bff1de8, 0x3dbf778a),
    (0x3bd36be9, 0x3d9f14b2),
    (0x3baf2031, 0x3d841bb4),
    (0x3b90fdbd, 0x3d5b4f88),
    (0x3b6ff7df, 0x3d35f2ba),
    (0x3b467c0b, 0x3d16e08d),
    (0x3b2417d4, 0x3cfa1a1e),
    (0x3b079862, 0x3ccf30a7),
    (0x3adffc37, 0x3cab8e9a),
    (0x3ab8e85b, 0x3c8dfba1),
    (0x3a9892fb, 0x3c6ae636),
    (0x3a7baaf5, 0x3c42374f),
    (0x3a4f75d5, 0x3c208024),
    (0x3a2aef8c, 0x3c0492c0),
    (0x3a0cc60c, 0x3bdae75b),
    (0x39e7c170, 0x3bb4a340),
    (0x39bead7b, 0x3b94fcf4),
    (0x399cce14, 0x3b75a5cf),
    (0x3980e32d, 0x3b4a68ef),
    (0x3953c741, 0x3b26b383),
    (0x392de7c9, 0x3b0939a3),
    (0x390ebc8e, 0x3ae1cfd0),
    (0x38ea31ee, 0x3ab9b3ce),
    (0x38c008fe, 0x3a98a48b),
    (0x389d638e, 0x3a7ad08d),
    (0x3880ee61, 0x3a4df654),
    (0x385322ce, 0x3a290c4d),
    (0x382ccb15, 0x3a0aaea4),
    (0x380d5872, 0x39e36e45),
    (0x37e7216f, 0x39ba6544),
    (0x37bce218, 0x3998b095),
    (0x379a4894, 0x397a092d),
    (0x377bec07, 0x394c9f41),
    (0x374d9386, 0x39276003),
    (0x3727acfd, 0x3908d758),
    (0x3708b256, 0x38dfa559),
    (0x36dec64b, 0x38b6ab0f),
    (0x36b570b9, 0x38952037),
    (0x3693b43a, 0x38735dd3),
    (0x36705d69, 0x38467c0a),
    (0x36437bc4, 0x3821ccfc),
    (0x361ee7d7, 0x3803d518),
    (0x36011c14, 0x37d6b981),
    (0x35d1b337, 0x37aec87a),
    (0x35aa371c, 0x378e33a7),
    (0x358a1932, 0x37674660),
    (0x355ff98b, 0x373bfab1),
    (0x353589f6, 0x3718b6d4),
    (0x3513127a, 0x36f80230),
    (0x34ee2ef2, 0x36c94905),
    (0x34c0c69d, 0x36a348d9),
    (0x349bf310, 0x368464b5),
    (0x347c31bf, 0x36569685),
    (0x344bd1ee, 0x362dd231),
    (0x3424a520, 0x360cbaf0),
    (0x3404ef72, 0x35e3c449),
    (0x33d68fd0, 0x35b839e2),
    (0x33ad122f, 0x3594efa4),
    (0x338b893c, 0x3570b1df),
    (0x3360e3a6, 0x354265d8),
    (0x3335237a, 0x351cede7),
    (0x3311d42c, 0x34fd3dc9),
    (0x32eab0cb, 0x34cc3b50),
    (0x32bcc25b, 0x34a4a05e),
    (0x3297be62, 0x3484a304),
    (0x3273db16, 0x34559f46),
    (0x3243d8af, 0x342bf19f),
    (0x321d3680, 0x340a545b),
    (0x31fc475d, 0x33de76f3),
    (0x31ca5141, 0x33b2cc8c),
    (0x31a22c05, 0x338fa24c),
    (0x3181edfc, 0x3366a843),
    (0x31501833, 0x33391cba),
    (0x31268f97, 0x33147ce5),
    (0x310540a5, 0x32ee1a5b),
    (0x30d51b65, 0x32beced8),
    (0x30aa535b, 0x3298d52b),
    (0x30881119, 0x3274b613),
    (0x30594acf, 0x3243d10c),
    (0x302d6b36, 0x321c9d69),
    (0x300a563f, 0x31fa666d),
    (0x2fdc98dc, 0x31c81354),
    (0x2fafcd12, 0x319fc975),
    (0x2f8c08aa, 0x317f1904),
    (0x2f5efaaf, 0x314b87d8),
    (0x2f317113, 0x31224ef3),
    (0x2f0d22bb, 0x31015f38),
    (0x2ee0685f, 0x30ce2339),
    (0x2eb251c3, 0x30a4258f),
    (0x2e8da0c6, 0x3082a54d),
    (0x2e60dd25, 0x304fdcca),
    (0x2e326c30, 0x30254727),
    (0x2e0d8121, 0x30035a7f),
    (0x2de05773, 0x2fd0aec3),
    (0x2db1bffd, 0x2fa5afef),
    (0x2d8cc431, 0x2f837c6d),
    (0x2d5ed902, 0x2f509664),
    (0x2d304f61, 0x2f255e85),
    (0x2d0b6c69, 0x2f030aa5),
    (0x2cdc66c4, 0x2ecf93fd),
    (0x2cae1f21, 0x2ea453fe),
    (0x2c897e36, 0x2e8206a5),
    (0x2c5908c8, 0x2e4daaf4),
    (0x2c2b3670, 0x2e2293d6),
    (0x2c06fff0, 0x2e0073d6),
    (0x2bd4ca13, 0x2dcae1ac),
    (0x2ba79ec9, 0x2da023e7),
    (0x2b83f9af, 0x2d7caee7),
    (0x2b4fb860, 0x2d474167),
    (0x2b2363bd, 0x2d1d0c41),
    (0x2b007524, 0x2cf770ea),
    (0x2ac9e3d6, 0x2cc2d60c),
    (0x2a9e92b5, 0x2c995702),
    (0x2a78fac8, 0x2c713ec4),
    (0x2a435eb5, 0x2c3daded),
    (0x2a193aaa, 0x2c15101b),
    (0x29f03d5a, 0x2bea2c50),
    (0x29bc3cf6, 0x2bb7d975),
    (0x29936bd8, 0x2b904516),
    (0x2966cc51, 0x2b624fc5),
    (0x293493e1, 0x2b316ad5),
    (0x290d376b, 0x2b0b04c7),
    (0x28dcc356, 0x2ad9c147),
    (0x28ac79ad, 0x2aaa759f),
    (0x2886af30, 0x2a855f07),
    (0x28523edb, 0x2a509a6a),
    (0x2824050c, 0x2a230e6d),
    (0x27ffca72, 0x29fec8c1),
    (0x27c75b9c, 0x29c6f5b1),
    (0x279b4cca, 0x299b4a74),
    (0x2771d725, 0x29724b83),
    (0x273c361f, 0x293cee14),
    (0x27126764, 0x29133f23),
    (0x26e3a7e2, 0x28e56858),
    (0x26b0ea36, 0x28b29e84),
    (0x26896aae, 0x288b01c6),
    (0x26555ed6, 0x285840d5),
    (0x26259297, 0x28282171),
    (0x26006b7c, 0x2802a722),
    (0x25c71c70, 0x27caf596),
    (0x259a4874, 0x279d9063),
    (0x256efab5, 0x2774865b),
    (0x2538fef0, 0x273da5bb),
    (0x250f232d, 0x27130395),
    (0x24dd6497, 0x26e3d176),
    (0x24ab220e, 0x26b06e78),
    (0x24843806, 0x268891a3),
    (0x244c3533, 0x26535285),
    (0x241d9eab, 0x26236ab9),
    (0x23f333ed, 0x25fc9e87),
    (0x23bb895c, 0x25c3294f),
    (0x23908aa2, 0x2596b2d7),
    (0x235eb305, 0x25689e19),
    (0x232b79f7, 0x2533722d),
    (0x2303f8a5, 0x250a5c5b),
    (0x22cb094e, 0x24d542a6),
    (0x229c1be0, 0x24a445ca),
    (0x226ff061, 0x247cf3b9),
    (0x22384dad, 0x2442a818),
    (0x220d7fe9, 0x2415b90c),
    (0x21d92b20, 0x23e635db),
    (0x21a691fd, 0x23b0e58d),
    (0x217f65e8, 0x2387dd07),
    (0x2143b3ec, 0x23509839),
    (0x2115e33f, 0x23200d5e),
    (0x20e57c23, 0x22f57e16),
    (0x20af973d, 0x22bc2e00),
    (0x208649d6, 0x22902d3f),
    (0x204d4d83, 0x225cd18d),
    (0x201cdbfe, 0x222904b4),
    (0x1fef93bd, 0x22014e73),
    (0x1fb6de68, 0x21c5c0eb),
    (0x1f8b8405, 0x21972479),
    (0x1f54c713, 0x2166ec36),
    (0x1f222d35, 0x2130523d),
    (0x1ef71927, 0x21069086),
    (0x1ebc2718, 0x20cd4b0f),
    (0x1e8f32ff, 0x209c85ba),
    (0x1e59ddc3, 0x206e8f29),
    (0x1e25a71b, 0x2035b53d),
    (0x1dfbc87b, 0x200a5661),
    (0x1dbf4167, 0x1fd288d5),
    (0x1d91353d, 0x1fa0208a),
    (0x1d5c631a, 0x1f73754b),
    (0x1d2729d6, 0x1f38fcbd),
    (0x1cfd76ae, 0x1f0c7d97),
    (0x1cc010bf, 0x1ed54a3f),
    (0x1c917833, 0x1ea1d3cb),
    (0x1c5c3fc3, 0x1e757178),
    (0x1c26a764, 0x1e3a0a73),
    (0x1bfc141f, 0x1e0cf23a),
    (0x1bbe8d91, 0x1dd575bf),
    (0x1b8ff968, 0x1da18fb3),
    (0x1b5974f4, 0x1d747139),
    (0x1b24246f, 0x1d38d48f),
    (0x1af7ad8b, 0x1d0bb00a),
    (0x1abac5c9, 0x1cd309be),
    (0x1a8cc6a1, 0x1c9f56ba),
    (0x1a541c58, 0x1c707de1),
    (0x1a1fb806, 0x1c356657),
    (0x19f06b47, 0x1c08c2bc),
    (0x19b4dbfa, 0x1bce1cba),
    (0x1987fd09, 0x1b9b3d7d),
    (0x194c668e, 0x1b69bbfd),
    (0x19198a40, 0x1b2fdf73),
    (0x18e68edd, 0x1b044540),
    (0x18ad054e, 0x1ac6dbe6),
    (0x1881c77a, 0x1a956976),
    (0x18429845, 0x1a60691f),
    (0x1811d1e0, 0x1a28720d),
    (0x17da6f34, 0x19fcc054),
    (0x17a38672, 0x19bd887f),
    (0x1774b806, 0x198e0ecc),
    (0x17370648, 0x1954d840),
    (0x1708d12d, 0x191f5fda),
    (0x16cc739d, 0x18ee8e9b),
    (0x1698afac, 0x18b273f8),
    (0x1663f1ae, 0x18856d4a),
    (0x162a10bb, 0x18476cf4),
    (0x15fda48f, 0x1814f659),
    (0x15bd0e1a, 0x17de6d9a),
    (0x158cd879, 0x17a5fb65),
    (0x1551c1e5, 0x1777998c),
    (0x151c1df9, 0x173895e1),
    (0x14e8466d, 0x17098a88),
    (0x14acb568, 0x16ccdf9b),
    (0x14805b01, 0x1698826b),
    (0x143eb151, 0x1662f29a),
    (0x140d955e, 0x1628c6d9),
    (0x13d22407, 0x15fae8e3),
    (0x139bdf21, 0x15ba6a2d),
    (0x13671f72, 0x158a6e25),
    (0x132b44c3, 0x154d7e87),
    (0x12fdb4e3, 0x15187319),
    (0x12bbd23f, 0x14e215a4),
    (0x128afa70, 0x14a78fa9),
    (0x124d92ee, 0x147840ab),
    (0x1217f777, 0x1437cfb1),
    (0x11e0915e, 0x140807fd),
    (0x11a5d8aa, 0x13c93e73),
    (0x1174d72b, 0x1394c97a),
    (0x1134a474, 0x135be665),
    (0x11053669, 0x13226be2),
    (0x10c46065, 0x12efd110),
    (0x1090acc4, 0x12b0f593),
    (0x10551115, 0x12828371),
    (0x101cd187, 0x12406c14),
    (0x0fe6ba07, 0x120dc782),
    (0x0fa9a6c1, 0x11d0d3f6),
    (0x0f795d83, 0x1199b798),
    (0x0f372d9a, 0x116230b9),
    (0x0f067e41, 0x112655c1),
    (0x0ec56641, 0x10f484a6),
    (0x0e90cb43, 0x10b3a328),
    (0x0e544fd3, 0x1083e85c),
    (0x0e1b94c1, 0x10419ffd),
    (0x0de3e84a, 0x100e0a3d),
    (0x0da6d8e4, 0x0fd04b66),
    (0x0d742c6c, 0x0f98a6f6),
    (0x0d3294f0, 0x0f5fa367),
    (0x0d028bdd, 0x0f23bcb5),
    (0x0cbec540, 0x0eefa4d1),
    (0x0c8b5230, 0x0eaf48cc),
    (0x0c4b653b, 0x0e80259a),
    (0x0c146596, 0x0e3b479f),
    (0x0bd86f4c, 0x0e08c869),
];
