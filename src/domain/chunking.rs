//! 文本分块
//!
//! 把分好的句子拼装成按 UTF-8 字节数限长的合成块，块边界总是落在句子边界上

/// 默认单块字节上限
///
/// 合成服务单次请求上限为 5000 字节，预留一部分给生成的标记
pub const DEFAULT_MAX_CHUNK_BYTES: usize = 4800;

/// 将句子序列拼装为合成块
///
/// 拼装策略：
/// 1. 累加器初始为空，每个句子以单个空格接到累加器后得到候选
/// 2. 候选字节数严格小于 `max_bytes` 时接受候选
/// 3. 否则输出非空累加器（去掉首尾空白），并以当前句子单独开启新块
/// 4. 处理完所有句子后输出剩余的非空累加器
///
/// 自身已达到上限的句子不会被截断，而是原样独立成块。
pub fn build_chunks<S: AsRef<str>>(sentences: &[S], max_bytes: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for sentence in sentences {
        let sentence = sentence.as_ref();
        let candidate_len = current.len() + 1 + sentence.len();

        if candidate_len < max_bytes {
            current.push(' ');
            current.push_str(sentence);
        } else {
            if !current.is_empty() {
                chunks.push(current.trim().to_string());
            }
            current = sentence.to_string();
        }
    }

    if !current.is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}

/// 截取文本的前 `max_bytes` 字节
///
/// 截断点回退到最近的字符边界，保证结果仍是合法 UTF-8
pub fn truncate_to_bytes(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }

    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
